//! Braille-side enumerations

closed_enum! {
    /// Braille clef signs
    pub enum BrailleClefKind {
        GTreble => "G clef",
        GFrenchViolin => "G clef on first line",
        GOttavaAlta => "G clef ottava alta",
        GOttavaBassa => "G clef ottava bassa",
        CSoprano => "C clef on first line",
        CMezzoSoprano => "C clef on second line",
        CAlto => "C clef on third line",
        CTenor => "C clef on fourth line",
        CBaritone => "C clef on fifth line",
        FBaritone => "F clef on third line",
        FBass => "F clef",
        FOttavaAlta => "F clef ottava alta",
        FOttavaBassa => "F clef ottava bassa",
    }
}

closed_enum! {
    /// Which accidental a key signature repeats
    pub enum BrailleKeyKind {
        Flats => "flats",
        Naturals => "naturals",
        Sharps => "sharps",
    }
}

closed_enum! {
    pub enum BrailleTimeKind {
        Common => "common",
        Cut => "cut",
        Numerical => "numerical",
        UpperNumberOnly => "upper number only",
        NumberAndNote => "number and note",
        NumberAndDottedNote => "number and dotted note",
    }
}

closed_enum! {
    pub enum BrailleBarlineKind {
        Special => "special",
        Unusual => "unusual",
        SectionalDouble => "sectional double",
        FinalDouble => "final double",
        RepeatStart => "repeat start",
        RepeatEnd => "repeat end",
    }
}

closed_enum! {
    pub enum BrailleAccidentalKind {
        Natural => "natural",
        Sharp => "sharp",
        Flat => "flat",
        DoubleSharp => "double sharp",
        DoubleFlat => "double flat",
        QuarterSharp => "quarter sharp",
        QuarterFlat => "quarter flat",
        ThreeQuartersSharp => "three quarters sharp",
        ThreeQuartersFlat => "three quarters flat",
    }
}

impl BrailleAccidentalKind {
    pub fn cells_width(self) -> usize {
        match self {
            BrailleAccidentalKind::Natural
            | BrailleAccidentalKind::Sharp
            | BrailleAccidentalKind::Flat => 1,
            _ => 2,
        }
    }
}

closed_enum! {
    pub enum BrailleDynamicsKind {
        PPP => "ppp",
        PP => "pp",
        P => "p",
        MP => "mp",
        MF => "mf",
        F => "f",
        FF => "ff",
        FFF => "fff",
        FP => "fp",
        FZ => "fz",
        RF => "rf",
        RFZ => "rfz",
        SF => "sf",
        SFZ => "sfz",
        SFP => "sfp",
        SFFZ => "sffz",
    }
}

closed_enum! {
    /// Braille octave marks, 1 to 7 plus the two extension marks
    pub enum BrailleOctaveKind {
        Below1 => "below 1",
        O1 => "1",
        O2 => "2",
        O3 => "3",
        O4 => "4",
        O5 => "5",
        O6 => "6",
        O7 => "7",
        Above7 => "above 7",
    }
}

closed_enum! {
    /// Braille note values share their cells by pairs (whole/16th...)
    pub enum NoteValueSize {
        Larger => "larger",
        Smaller => "smaller",
    }
}

closed_enum! {
    /// Interval signs written after the first note of a chord
    pub enum BrailleIntervalKind {
        Second => "second",
        Third => "third",
        Fourth => "fourth",
        Fifth => "fifth",
        Sixth => "sixth",
        Seventh => "seventh",
        Octave => "octave",
    }
}

closed_enum! {
    /// Note and rest values, one per step or rest and written duration
    pub enum NoteValueKind {
        RestBreve => "rest breve",
        RestWhole => "rest whole",
        RestHalf => "rest half",
        RestQuarter => "rest quarter",
        Rest8th => "rest 8th",
        Rest16th => "rest 16th",
        Rest32nd => "rest 32nd",
        Rest64th => "rest 64th",
        Rest128th => "rest 128th",
        Rest256th => "rest 256th",
        CBreve => "C breve",
        CWhole => "C whole",
        CHalf => "C half",
        CQuarter => "C quarter",
        C8th => "C 8th",
        C16th => "C 16th",
        C32nd => "C 32nd",
        C64th => "C 64th",
        C128th => "C 128th",
        C256th => "C 256th",
        DBreve => "D breve",
        DWhole => "D whole",
        DHalf => "D half",
        DQuarter => "D quarter",
        D8th => "D 8th",
        D16th => "D 16th",
        D32nd => "D 32nd",
        D64th => "D 64th",
        D128th => "D 128th",
        D256th => "D 256th",
        EBreve => "E breve",
        EWhole => "E whole",
        EHalf => "E half",
        EQuarter => "E quarter",
        E8th => "E 8th",
        E16th => "E 16th",
        E32nd => "E 32nd",
        E64th => "E 64th",
        E128th => "E 128th",
        E256th => "E 256th",
        FBreve => "F breve",
        FWhole => "F whole",
        FHalf => "F half",
        FQuarter => "F quarter",
        F8th => "F 8th",
        F16th => "F 16th",
        F32nd => "F 32nd",
        F64th => "F 64th",
        F128th => "F 128th",
        F256th => "F 256th",
        GBreve => "G breve",
        GWhole => "G whole",
        GHalf => "G half",
        GQuarter => "G quarter",
        G8th => "G 8th",
        G16th => "G 16th",
        G32nd => "G 32nd",
        G64th => "G 64th",
        G128th => "G 128th",
        G256th => "G 256th",
        ABreve => "A breve",
        AWhole => "A whole",
        AHalf => "A half",
        AQuarter => "A quarter",
        A8th => "A 8th",
        A16th => "A 16th",
        A32nd => "A 32nd",
        A64th => "A 64th",
        A128th => "A 128th",
        A256th => "A 256th",
        BBreve => "B breve",
        BWhole => "B whole",
        BHalf => "B half",
        BQuarter => "B quarter",
        B8th => "B 8th",
        B16th => "B 16th",
        B32nd => "B 32nd",
        B64th => "B 64th",
        B128th => "B 128th",
        B256th => "B 256th",
    }
}
