//! Closed enumerations of the Music Score Representation
//!
//! These are the source-side inputs of every mapping table. Each one
//! carries an `ALL` list so callers can iterate the whole value set.

use crate::Rational;

closed_enum! {
    /// Diatonic pitch step
    pub enum DiatonicPitch {
        C => "C",
        D => "D",
        E => "E",
        F => "F",
        G => "G",
        A => "A",
        B => "B",
    }
}

impl DiatonicPitch {
    /// Number of diatonic steps above C within an octave (C=0 .. B=6)
    pub fn offset_from_c(self) -> i32 {
        match self {
            DiatonicPitch::C => 0,
            DiatonicPitch::D => 1,
            DiatonicPitch::E => 2,
            DiatonicPitch::F => 3,
            DiatonicPitch::G => 4,
            DiatonicPitch::A => 5,
            DiatonicPitch::B => 6,
        }
    }
}

closed_enum! {
    /// Pitch alteration in quarter tones
    pub enum Alteration {
        TripleFlat => "triple flat",
        DoubleFlat => "double flat",
        SesquiFlat => "sesqui flat",
        Flat => "flat",
        SemiFlat => "semi flat",
        Natural => "natural",
        SemiSharp => "semi sharp",
        Sharp => "sharp",
        SesquiSharp => "sesqui sharp",
        DoubleSharp => "double sharp",
        TripleSharp => "triple sharp",
    }
}

impl Default for Alteration {
    fn default() -> Self {
        Alteration::Natural
    }
}

closed_enum! {
    /// Graphic duration category of a note, rest or beat unit
    pub enum DurationKind {
        D1024th => "1024th",
        D512th => "512th",
        D256th => "256th",
        D128th => "128th",
        D64th => "64th",
        D32nd => "32nd",
        D16th => "16th",
        Eighth => "eighth",
        Quarter => "quarter",
        Half => "half",
        Whole => "whole",
        Breve => "breve",
        Long => "long",
        Maxima => "maxima",
    }
}

impl DurationKind {
    /// Undotted length as a fraction of a whole note
    pub fn whole_notes(self) -> Rational {
        match self {
            DurationKind::D1024th => Rational::new(1, 1024),
            DurationKind::D512th => Rational::new(1, 512),
            DurationKind::D256th => Rational::new(1, 256),
            DurationKind::D128th => Rational::new(1, 128),
            DurationKind::D64th => Rational::new(1, 64),
            DurationKind::D32nd => Rational::new(1, 32),
            DurationKind::D16th => Rational::new(1, 16),
            DurationKind::Eighth => Rational::new(1, 8),
            DurationKind::Quarter => Rational::new(1, 4),
            DurationKind::Half => Rational::new(1, 2),
            DurationKind::Whole => Rational::new(1, 1),
            DurationKind::Breve => Rational::new(2, 1),
            DurationKind::Long => Rational::new(4, 1),
            DurationKind::Maxima => Rational::new(8, 1),
        }
    }

    /// Length including augmentation dots
    pub fn dotted_whole_notes(self, dots: u8) -> Rational {
        let base = self.whole_notes();
        let mut total = base;
        let mut increment = base;
        for _ in 0..dots {
            increment /= 2;
            total += increment;
        }
        total
    }
}

closed_enum! {
    /// Clef kinds
    pub enum ClefKind {
        None => "none",
        Treble => "treble",
        Soprano => "soprano",
        MezzoSoprano => "mezzo soprano",
        Alto => "alto",
        Tenor => "tenor",
        Baritone => "baritone",
        Bass => "bass",
        TrebleLine1 => "treble line 1",
        TrebleMinus15 => "treble minus 15",
        TrebleMinus8 => "treble minus 8",
        TreblePlus8 => "treble plus 8",
        TreblePlus15 => "treble plus 15",
        BassMinus15 => "bass minus 15",
        BassMinus8 => "bass minus 8",
        BassPlus8 => "bass plus 8",
        BassPlus15 => "bass plus 15",
        VarBaritone => "varbaritone",
        Tablature4 => "tablature 4 lines",
        Tablature5 => "tablature 5 lines",
        Tablature6 => "tablature 6 lines",
        Tablature7 => "tablature 7 lines",
        Percussion => "percussion",
        Jianpu => "jianpu",
    }
}

closed_enum! {
    /// Key modes
    pub enum KeyMode {
        Major => "major",
        Minor => "minor",
        Ionian => "ionian",
        Dorian => "dorian",
        Phrygian => "phrygian",
        Lydian => "lydian",
        Mixolydian => "mixolydian",
        Aeolian => "aeolian",
        Locrian => "locrian",
    }
}

closed_enum! {
    /// Time signature symbols
    pub enum TimeSymbolKind {
        None => "none",
        Common => "common",
        Cut => "cut",
        Note => "note",
        DottedNote => "dotted note",
        SingleNumber => "single number",
        SenzaMisura => "senza misura",
    }
}

closed_enum! {
    /// Barline styles
    pub enum BarlineStyle {
        None => "none",
        Regular => "regular",
        Dotted => "dotted",
        Dashed => "dashed",
        Heavy => "heavy",
        LightLight => "light-light",
        LightHeavy => "light-heavy",
        HeavyLight => "heavy-light",
        HeavyHeavy => "heavy-heavy",
        Tick => "tick",
        Short => "short",
    }
}

closed_enum! {
    /// Where a barline sits in its measure
    pub enum BarlineLocation {
        Left => "left",
        Middle => "middle",
        Right => "right",
    }
}

closed_enum! {
    /// Structural role of a barline
    pub enum BarlineCategory {
        Standalone => "standalone",
        RepeatStart => "repeat start",
        RepeatEnd => "repeat end",
        HookedEndingStart => "hooked ending start",
        HookedEndingEnd => "hooked ending end",
        HooklessEndingStart => "hookless ending start",
        HooklessEndingEnd => "hookless ending end",
    }
}

closed_enum! {
    /// Accidentals displayed in front of a note
    pub enum AccidentalKind {
        None => "none",
        Sharp => "sharp",
        Natural => "natural",
        Flat => "flat",
        DoubleSharp => "double sharp",
        SharpSharp => "sharp sharp",
        FlatFlat => "flat flat",
        NaturalSharp => "natural sharp",
        NaturalFlat => "natural flat",
        QuarterFlat => "quarter flat",
        QuarterSharp => "quarter sharp",
        ThreeQuartersFlat => "three quarters flat",
        ThreeQuartersSharp => "three quarters sharp",
        SharpDown => "sharp down",
        SharpUp => "sharp up",
        NaturalDown => "natural down",
        NaturalUp => "natural up",
        FlatDown => "flat down",
        FlatUp => "flat up",
        TripleSharp => "triple sharp",
        TripleFlat => "triple flat",
        SlashQuarterSharp => "slash quarter sharp",
        SlashSharp => "slash sharp",
        SlashFlat => "slash flat",
        DoubleSlashFlat => "double slash flat",
        Sharp1 => "sharp 1",
        Sharp2 => "sharp 2",
        Sharp3 => "sharp 3",
        Sharp5 => "sharp 5",
        Flat1 => "flat 1",
        Flat2 => "flat 2",
        Flat3 => "flat 3",
        Flat4 => "flat 4",
        Sori => "sori",
        Koron => "koron",
        Other => "other",
    }
}

impl Default for AccidentalKind {
    fn default() -> Self {
        AccidentalKind::None
    }
}

closed_enum! {
    /// Dynamics marks
    pub enum DynamicsKind {
        F => "f",
        FF => "ff",
        FFF => "fff",
        FFFF => "ffff",
        FFFFF => "fffff",
        FFFFFF => "ffffff",
        P => "p",
        PP => "pp",
        PPP => "ppp",
        PPPP => "pppp",
        PPPPP => "ppppp",
        PPPPPP => "pppppp",
        MF => "mf",
        MP => "mp",
        FP => "fp",
        FZ => "fz",
        PF => "pf",
        RF => "rf",
        SF => "sf",
        RFZ => "rfz",
        SFZ => "sfz",
        SFP => "sfp",
        SFPP => "sfpp",
        SFFZ => "sffz",
        SFZP => "sfzp",
        N => "n",
    }
}

closed_enum! {
    /// Articulations
    pub enum ArticulationKind {
        Accent => "accent",
        BreathMark => "breath mark",
        Caesura => "caesura",
        Spiccato => "spiccato",
        Staccato => "staccato",
        Staccatissimo => "staccatissimo",
        Stress => "stress",
        Unstress => "unstress",
        DetachedLegato => "detached legato",
        StrongAccent => "strong accent",
        Tenuto => "tenuto",
        Fermata => "fermata",
        Arpeggiato => "arpeggiato",
        NonArpeggiato => "non arpeggiato",
        Doit => "doit",
        Falloff => "falloff",
        Plop => "plop",
        Scoop => "scoop",
    }
}

closed_enum! {
    /// Technical indications
    pub enum TechnicalKind {
        Arrow => "arrow",
        Bend => "bend",
        DoubleTongue => "double tongue",
        DownBow => "down bow",
        Fingering => "fingering",
        Fingernails => "fingernails",
        Fret => "fret",
        HammerOn => "hammer on",
        Handbell => "handbell",
        Harmonic => "harmonic",
        Heel => "heel",
        Hole => "hole",
        OpenString => "open string",
        OtherTechnical => "other technical",
        Pluck => "pluck",
        PullOff => "pull off",
        SnapPizzicato => "snap pizzicato",
        Stopped => "stopped",
        StringNumber => "string",
        Tap => "tap",
        ThumbPosition => "thumb position",
        Toe => "toe",
        TripleTongue => "triple tongue",
        UpBow => "up bow",
        Damp => "damp",
        DampAll => "damp all",
    }
}

closed_enum! {
    /// Ornaments
    pub enum OrnamentKind {
        Trill => "trill",
        Dashes => "dashes",
        Turn => "turn",
        InvertedTurn => "inverted turn",
        DelayedTurn => "delayed turn",
        DelayedInvertedTurn => "delayed inverted turn",
        VerticalTurn => "vertical turn",
        Mordent => "mordent",
        InvertedMordent => "inverted mordent",
        Schleifer => "schleifer",
        Shake => "shake",
        AccidentalMark => "accidental mark",
    }
}

closed_enum! {
    /// Note kinds, as determined by the builder that produced the score
    pub enum NoteKind {
        Regular => "regular",
        Rest => "rest",
        Skip => "skip",
        Unpitched => "unpitched",
        Grace => "grace",
        GraceChordMember => "grace chord member",
        GraceTupletMember => "grace tuplet member",
        ChordMember => "chord member",
        TupletMember => "tuplet member",
        TupletRestMember => "tuplet rest member",
        DoubleTremoloMember => "double tremolo member",
    }
}

impl NoteKind {
    pub fn is_grace(self) -> bool {
        matches!(
            self,
            NoteKind::Grace | NoteKind::GraceChordMember | NoteKind::GraceTupletMember
        )
    }

    pub fn is_rest(self) -> bool {
        matches!(self, NoteKind::Rest | NoteKind::TupletRestMember)
    }
}

closed_enum! {
    /// Staff kinds
    pub enum StaffKind {
        Regular => "regular",
        Tablature => "tablature",
        Drum => "drum",
        Rhythmic => "rhythmic",
        Harmony => "harmony",
        FiguredBass => "figured bass",
    }
}

closed_enum! {
    /// Voice kinds
    pub enum VoiceKind {
        Regular => "regular",
        Harmony => "harmony",
        FiguredBass => "figured bass",
    }
}

closed_enum! {
    /// Measure kinds
    pub enum MeasureKind {
        Regular => "regular",
        Anacrusis => "anacrusis",
        IncompleteStandalone => "incomplete standalone",
        IncompleteLastInRepeatCommonPart => "incomplete last in repeat common part",
        IncompleteLastInRepeatHookedEnding => "incomplete last in repeat hooked ending",
        IncompleteLastInRepeatHooklessEnding => "incomplete last in repeat hookless ending",
        IncompleteNextMeasureAfterCommonPart => "incomplete next measure after common part",
        IncompleteNextMeasureAfterHooklessEnding => "incomplete next measure after hookless ending",
        Overfull => "overfull",
        Cadenza => "cadenza",
        Empty => "empty",
    }
}

impl Default for MeasureKind {
    fn default() -> Self {
        MeasureKind::Regular
    }
}

closed_enum! {
    /// Which slot of a double tremolo an element fills
    pub enum TremoloPosition {
        First => "first",
        Second => "second",
    }
}

closed_enum! {
    /// Ties
    pub enum TieKind {
        Start => "start",
        Continue => "continue",
        Stop => "stop",
    }
}

closed_enum! {
    /// Slurs
    pub enum SlurKind {
        Start => "start",
        Continue => "continue",
        Stop => "stop",
        PhrasingStart => "phrasing start",
        PhrasingStop => "phrasing stop",
    }
}

closed_enum! {
    /// Beams
    pub enum BeamKind {
        Begin => "begin",
        Continue => "continue",
        End => "end",
        ForwardHook => "forward hook",
        BackwardHook => "backward hook",
    }
}

closed_enum! {
    /// Wedges (hairpins)
    pub enum WedgeKind {
        Crescendo => "crescendo",
        Diminuendo => "diminuendo",
        Stop => "stop",
    }
}

closed_enum! {
    /// Glissando boundaries
    pub enum GlissandoKind {
        Start => "start",
        Stop => "stop",
    }
}

closed_enum! {
    /// Syllable kinds
    pub enum SyllableKind {
        Single => "single",
        Begin => "begin",
        Middle => "middle",
        End => "end",
        Skip => "skip",
        MeasureEnd => "measure end",
        LineBreak => "line break",
        PageBreak => "page break",
    }
}

closed_enum! {
    /// Syllable extender lines
    pub enum SyllableExtend {
        Single => "single",
        Start => "start",
        Continue => "continue",
        Stop => "stop",
    }
}

closed_enum! {
    /// Harmony kinds
    pub enum HarmonyKind {
        Major => "major",
        Minor => "minor",
        Augmented => "augmented",
        Diminished => "diminished",
        Dominant => "dominant",
        MajorSeventh => "major seventh",
        MinorSeventh => "minor seventh",
        DiminishedSeventh => "diminished seventh",
        AugmentedSeventh => "augmented seventh",
        HalfDiminished => "half diminished",
        MinorMajorSeventh => "minor major seventh",
        MajorSixth => "major sixth",
        MinorSixth => "minor sixth",
        DominantNinth => "dominant ninth",
        MajorNinth => "major ninth",
        MinorNinth => "minor ninth",
        DominantEleventh => "dominant eleventh",
        MajorEleventh => "major eleventh",
        MinorEleventh => "minor eleventh",
        DominantThirteenth => "dominant thirteenth",
        MajorThirteenth => "major thirteenth",
        MinorThirteenth => "minor thirteenth",
        SuspendedSecond => "suspended second",
        SuspendedFourth => "suspended fourth",
        Neapolitan => "neapolitan",
        Italian => "italian",
        French => "french",
        German => "german",
        Pedal => "pedal",
        Power => "power",
        Tristan => "tristan",
        Other => "other",
        None => "none",
    }
}

closed_enum! {
    /// Tempo kinds
    pub enum TempoKind {
        Words => "words",
        BeatUnitsPerMinute => "beat units per minute",
        BeatUnitsEquivalence => "beat units equivalence",
        NotesRelationship => "notes relationship",
    }
}

closed_enum! {
    /// Placement above or below the staff
    pub enum Placement {
        Above => "above",
        Below => "below",
    }
}

closed_enum! {
    /// Part group bracket symbols
    pub enum PartGroupSymbol {
        None => "none",
        Brace => "brace",
        Bracket => "bracket",
        Line => "line",
        Square => "square",
    }
}

closed_enum! {
    /// Tuplet bracket shapes
    pub enum TupletLineShape {
        Straight => "straight",
        Curved => "curved",
    }
}

closed_enum! {
    /// Whether a grace notes group precedes or follows its note
    pub enum GraceNotesGroupKind {
        Before => "before",
        After => "after",
    }
}

closed_enum! {
    /// Repeat ending kinds
    pub enum RepeatEndingKind {
        Hooked => "hooked",
        Hookless => "hookless",
    }
}

closed_enum! {
    /// Frames drawn around rehearsal marks
    pub enum RehearsalEnclosure {
        None => "none",
        Rectangle => "rectangle",
        Oval => "oval",
        Circle => "circle",
        Bracket => "bracket",
        Triangle => "triangle",
        Diamond => "diamond",
    }
}
