//! LilyPond-side enumerations
//!
//! The names are the LilyPond spellings the renderer emits.

closed_enum! {
    /// LilyPond `\clef` names
    pub enum LilypondClefKind {
        Treble => "treble",
        Soprano => "soprano",
        MezzoSoprano => "mezzosoprano",
        Alto => "alto",
        Tenor => "tenor",
        Baritone => "baritone",
        VarBaritone => "varbaritone",
        Bass => "bass",
        French => "french",
        TrebleOctaveDown => "treble_8",
        TrebleOctaveUp => "treble^8",
        TrebleTwoOctavesDown => "treble_15",
        TrebleTwoOctavesUp => "treble^15",
        BassOctaveDown => "bass_8",
        BassOctaveUp => "bass^8",
        BassTwoOctavesDown => "bass_15",
        BassTwoOctavesUp => "bass^15",
        Tab => "tab",
        Percussion => "percussion",
        Jianpu => "jianpu",
    }
}

closed_enum! {
    /// LilyPond `\key` modes
    pub enum LilypondKeyMode {
        Major => "\\major",
        Minor => "\\minor",
        Ionian => "\\ionian",
        Dorian => "\\dorian",
        Phrygian => "\\phrygian",
        Lydian => "\\lydian",
        Mixolydian => "\\mixolydian",
        Aeolian => "\\aeolian",
        Locrian => "\\locrian",
    }
}

closed_enum! {
    /// How a time signature is displayed
    pub enum LilypondTimeStyle {
        /// Plain numbers (`\numericTimeSignature`)
        Numeric => "numeric",
        /// C / alla breve symbols for 4/4 and 2/2
        Default => "default",
        /// Upper number only
        SingleDigit => "single-digit",
        /// `\cadenzaOn`, no time signature shown
        SenzaMisura => "senza-misura",
    }
}

closed_enum! {
    /// LilyPond `\bar` types
    pub enum LilypondBarType {
        Hidden => "",
        Single => "|",
        Dotted => ";",
        Dashed => "!",
        Heavy => ".",
        Double => "||",
        Final => "|.",
        StartFinal => ".|",
        HeavyHeavy => "..",
        Tick => "'",
        Short => ",",
        StartRepeat => ".|:",
    }
}

closed_enum! {
    /// Graphic duration written in LilyPond source
    pub enum LilypondDurationKind {
        D1024 => "1024",
        D512 => "512",
        D256 => "256",
        D128 => "128",
        D64 => "64",
        D32 => "32",
        D16 => "16",
        D8 => "8",
        D4 => "4",
        D2 => "2",
        D1 => "1",
        Breve => "\\breve",
        Longa => "\\longa",
        Maxima => "\\maxima",
    }
}

closed_enum! {
    /// Whether a dynamic is predefined or built with `make-dynamic-script`
    pub enum LilypondDynamicsCommand {
        Predefined => "predefined",
        MakeDynamicScript => "make-dynamic-script",
    }
}

closed_enum! {
    /// Articulations as LilyPond post-events
    pub enum LilypondArticulationKind {
        Accent => "->",
        Breathe => "\\breathe",
        Caesura => "\\caesura",
        Staccato => "-.",
        Staccatissimo => "-!",
        Portato => "-_",
        Marcato => "-^",
        Tenuto => "--",
        Fermata => "\\fermata",
        Arpeggio => "\\arpeggio",
        ArpeggioBracket => "\\arpeggioBracket",
        BendAfterUp => "\\bendAfter #+4",
        BendAfterDown => "\\bendAfter #-4",
    }
}

closed_enum! {
    /// Technical indications as LilyPond post-events or markups
    pub enum LilypondTechnicalKind {
        Bend => "\\bendAfter",
        Tongue => "\\tongue",
        DownBow => "\\downbow",
        UpBow => "\\upbow",
        Fingering => "fingering",
        Fret => "fret",
        HammerOn => "hammer-on",
        PullOff => "pull-off",
        Flageolet => "\\flageolet",
        LeftHeel => "\\lheel",
        LeftToe => "\\ltoe",
        Open => "\\open",
        TextMarkup => "markup",
        SnapPizzicato => "\\snappizzicato",
        Stopped => "\\stopped",
        StringNumber => "string-number",
        Thumb => "\\thumb",
        Damp => "\\damp",
        DampAll => "\\dampAll",
    }
}

closed_enum! {
    /// Ornaments as LilyPond post-events
    pub enum LilypondOrnamentKind {
        Trill => "\\trill",
        Turn => "\\turn",
        ReverseTurn => "\\reverseturn",
        DelayedTurn => "delayed \\turn",
        DelayedReverseTurn => "delayed \\reverseturn",
        Mordent => "\\mordent",
        Prall => "\\prall",
        PrallPrall => "\\prallprall",
        AccidentalMarkup => "accidental markup",
    }
}

closed_enum! {
    /// How a note's accidental is displayed
    pub enum LilypondAccidentalKind {
        /// Left to LilyPond's accidental style
        Default => "default",
        Sharp => "sharp",
        Natural => "natural",
        Flat => "flat",
        DoubleSharp => "double sharp",
        FlatFlat => "flat flat",
        QuarterSharp => "quarter sharp",
        QuarterFlat => "quarter flat",
        ThreeQuartersSharp => "three quarters sharp",
        ThreeQuartersFlat => "three quarters flat",
    }
}

closed_enum! {
    /// Chord-mode modifiers for chord names
    pub enum LilypondChordModifier {
        Major => "5",
        Minor => "m",
        Augmented => "aug",
        Diminished => "dim",
        Dominant => "7",
        MajorSeventh => "maj7",
        MinorSeventh => "m7",
        DiminishedSeventh => "dim7",
        AugmentedSeventh => "aug7",
        HalfDiminished => "m7.5-",
        MinorMajorSeventh => "m7+",
        MajorSixth => "6",
        MinorSixth => "m6",
        DominantNinth => "9",
        MajorNinth => "maj9",
        MinorNinth => "m9",
        DominantEleventh => "11",
        MajorEleventh => "maj11",
        MinorEleventh => "m11",
        DominantThirteenth => "13",
        MajorThirteenth => "maj13",
        MinorThirteenth => "m13",
        SuspendedSecond => "sus2",
        SuspendedFourth => "sus4",
        Pedal => "1",
        Power => "1.5",
        NoChord => "r",
    }
}

closed_enum! {
    /// Staff-level LilyPond contexts
    pub enum LilypondStaffContext {
        Staff => "Staff",
        TabStaff => "TabStaff",
        DrumStaff => "DrumStaff",
        RhythmicStaff => "RhythmicStaff",
        ChordNames => "ChordNames",
        FiguredBass => "FiguredBass",
    }
}

closed_enum! {
    /// Voice-level LilyPond contexts
    pub enum LilypondVoiceContext {
        Voice => "Voice",
        TabVoice => "TabVoice",
        DrumVoice => "DrumVoice",
        ChordNames => "ChordNames",
        FiguredBass => "FiguredBass",
    }
}

closed_enum! {
    /// Contexts enclosing a part group block
    pub enum LilypondGroupContext {
        Simultaneous => "<<",
        StaffGroup => "StaffGroup",
        ChoirStaff => "ChoirStaff",
        GrandStaff => "GrandStaff",
        PianoStaff => "PianoStaff",
        StaffGroupLine => "StaffGroup (line)",
        StaffGroupSquare => "StaffGroup (square)",
    }
}

closed_enum! {
    /// Hairpins
    pub enum LilypondWedgeKind {
        Crescendo => "\\<",
        Decrescendo => "\\>",
        Stop => "\\!",
    }
}

closed_enum! {
    /// Lyric tokens in `\lyricmode`
    pub enum LilypondLyricKind {
        Single => "single",
        Begin => "begin",
        Middle => "middle",
        End => "end",
        Skip => "_",
        BarCheck => "|",
        LineBreak => "line break",
        PageBreak => "page break",
    }
}

closed_enum! {
    /// Figured bass prefixes and suffixes
    pub enum LilypondFigureAffix {
        Sharp => "+",
        Flat => "-",
        Natural => "!",
        DoubleSharp => "++",
        DoubleFlat => "--",
        Slashed => "/",
    }
}

closed_enum! {
    /// Tempo mark shapes
    pub enum LilypondTempoKind {
        Text => "text",
        Metronome => "metronome",
        Equivalence => "equivalence",
        Relationship => "relationship",
    }
}

closed_enum! {
    /// Support code the renderer must emit once for the whole score
    pub enum ScoreFeature {
        TupletsCurvedBrackets => "tuplets curved brackets",
        AfterGrace => "after grace",
        TempoRelationship => "tempo relationship",
        GlissandoWithText => "glissando with text",
        OtherDynamic => "other dynamic",
        CustomDynamics => "custom dynamics",
        CustomShortBarline => "custom short barline",
        Tongue => "tongue",
        Damp => "damp",
        DampAll => "damp all",
        EditorialAccidental => "editorial accidental",
        CautionaryAccidental => "cautionary accidental",
        JianpuFile => "jianpu file",
        MergeRests => "merge rests",
        CustomKeyAlterations => "custom key alterations",
    }
}
