//! MSR to LPSR mapping tables
//!
//! `None` means LilyPond has no counterpart for the source value. Some
//! values need support code in the generated file; those tables also
//! return the [`ScoreFeature`] to set.

use crate::lpsr::*;
use crate::msr::{
    AccidentalKind, Alteration, ArticulationKind, BarlineStyle, ClefKind, DurationKind,
    DynamicsKind, HarmonyKind, KeyMode, OrnamentKind, PartGroupSymbol, StaffKind, SyllableKind,
    TechnicalKind, TempoKind, TimeSymbolKind, VoiceKind, WedgeKind,
};

/// Clef name plus the tablature line count for tab clefs
pub fn lilypond_clef(kind: ClefKind) -> Option<(LilypondClefKind, Option<u8>)> {
    let clef = match kind {
        ClefKind::Treble => LilypondClefKind::Treble,
        ClefKind::Soprano => LilypondClefKind::Soprano,
        ClefKind::MezzoSoprano => LilypondClefKind::MezzoSoprano,
        ClefKind::Alto => LilypondClefKind::Alto,
        ClefKind::Tenor => LilypondClefKind::Tenor,
        ClefKind::Baritone => LilypondClefKind::Baritone,
        ClefKind::VarBaritone => LilypondClefKind::VarBaritone,
        ClefKind::Bass => LilypondClefKind::Bass,
        ClefKind::TrebleLine1 => LilypondClefKind::French,
        ClefKind::TrebleMinus15 => LilypondClefKind::TrebleTwoOctavesDown,
        ClefKind::TrebleMinus8 => LilypondClefKind::TrebleOctaveDown,
        ClefKind::TreblePlus8 => LilypondClefKind::TrebleOctaveUp,
        ClefKind::TreblePlus15 => LilypondClefKind::TrebleTwoOctavesUp,
        ClefKind::BassMinus15 => LilypondClefKind::BassTwoOctavesDown,
        ClefKind::BassMinus8 => LilypondClefKind::BassOctaveDown,
        ClefKind::BassPlus8 => LilypondClefKind::BassOctaveUp,
        ClefKind::BassPlus15 => LilypondClefKind::BassTwoOctavesUp,
        ClefKind::Tablature4 => return Some((LilypondClefKind::Tab, Some(4))),
        ClefKind::Tablature5 => return Some((LilypondClefKind::Tab, Some(5))),
        ClefKind::Tablature6 => return Some((LilypondClefKind::Tab, Some(6))),
        ClefKind::Tablature7 => return Some((LilypondClefKind::Tab, Some(7))),
        ClefKind::Percussion => LilypondClefKind::Percussion,
        ClefKind::Jianpu => LilypondClefKind::Jianpu,
        ClefKind::None => return None,
    };
    Some((clef, None))
}

pub fn clef_feature(kind: LilypondClefKind) -> Option<ScoreFeature> {
    match kind {
        LilypondClefKind::Jianpu => Some(ScoreFeature::JianpuFile),
        _ => None,
    }
}

pub fn lilypond_key_mode(mode: KeyMode) -> LilypondKeyMode {
    match mode {
        KeyMode::Major => LilypondKeyMode::Major,
        KeyMode::Minor => LilypondKeyMode::Minor,
        KeyMode::Ionian => LilypondKeyMode::Ionian,
        KeyMode::Dorian => LilypondKeyMode::Dorian,
        KeyMode::Phrygian => LilypondKeyMode::Phrygian,
        KeyMode::Lydian => LilypondKeyMode::Lydian,
        KeyMode::Mixolydian => LilypondKeyMode::Mixolydian,
        KeyMode::Aeolian => LilypondKeyMode::Aeolian,
        KeyMode::Locrian => LilypondKeyMode::Locrian,
    }
}

/// LilyPond pitch names stop at double alterations
pub fn lilypond_supports_alteration(alteration: Alteration) -> bool {
    !matches!(alteration, Alteration::TripleFlat | Alteration::TripleSharp)
}

pub fn lilypond_time_style(symbol: TimeSymbolKind) -> Option<LilypondTimeStyle> {
    let style = match symbol {
        TimeSymbolKind::None => LilypondTimeStyle::Numeric,
        TimeSymbolKind::Common | TimeSymbolKind::Cut => LilypondTimeStyle::Default,
        TimeSymbolKind::SingleNumber => LilypondTimeStyle::SingleDigit,
        TimeSymbolKind::SenzaMisura => LilypondTimeStyle::SenzaMisura,
        TimeSymbolKind::Note | TimeSymbolKind::DottedNote => return None,
    };
    Some(style)
}

pub fn lilypond_bar_type(style: BarlineStyle) -> (LilypondBarType, Option<ScoreFeature>) {
    let bar_type = match style {
        BarlineStyle::None => LilypondBarType::Hidden,
        BarlineStyle::Regular => LilypondBarType::Single,
        BarlineStyle::Dotted => LilypondBarType::Dotted,
        BarlineStyle::Dashed => LilypondBarType::Dashed,
        BarlineStyle::Heavy => LilypondBarType::Heavy,
        BarlineStyle::LightLight => LilypondBarType::Double,
        BarlineStyle::LightHeavy => LilypondBarType::Final,
        BarlineStyle::HeavyLight => LilypondBarType::StartFinal,
        BarlineStyle::HeavyHeavy => LilypondBarType::HeavyHeavy,
        BarlineStyle::Tick => LilypondBarType::Tick,
        BarlineStyle::Short => return (LilypondBarType::Short, Some(ScoreFeature::CustomShortBarline)),
    };
    (bar_type, None)
}

pub fn lilypond_duration_kind(duration: DurationKind) -> LilypondDurationKind {
    match duration {
        DurationKind::D1024th => LilypondDurationKind::D1024,
        DurationKind::D512th => LilypondDurationKind::D512,
        DurationKind::D256th => LilypondDurationKind::D256,
        DurationKind::D128th => LilypondDurationKind::D128,
        DurationKind::D64th => LilypondDurationKind::D64,
        DurationKind::D32nd => LilypondDurationKind::D32,
        DurationKind::D16th => LilypondDurationKind::D16,
        DurationKind::Eighth => LilypondDurationKind::D8,
        DurationKind::Quarter => LilypondDurationKind::D4,
        DurationKind::Half => LilypondDurationKind::D2,
        DurationKind::Whole => LilypondDurationKind::D1,
        DurationKind::Breve => LilypondDurationKind::Breve,
        DurationKind::Long => LilypondDurationKind::Longa,
        DurationKind::Maxima => LilypondDurationKind::Maxima,
    }
}

pub fn lilypond_duration(duration: DurationKind, dots: u8) -> LilypondDuration {
    LilypondDuration::new(lilypond_duration_kind(duration), dots)
}

// ============================================================================
// EXPRESSION
// ============================================================================

/// Dynamics outside LilyPond's predefined set go through `make-dynamic-script`
pub fn lilypond_dynamics_command(kind: DynamicsKind) -> LilypondDynamicsCommand {
    match kind {
        DynamicsKind::F
        | DynamicsKind::FF
        | DynamicsKind::FFF
        | DynamicsKind::FFFF
        | DynamicsKind::FFFFF
        | DynamicsKind::P
        | DynamicsKind::PP
        | DynamicsKind::PPP
        | DynamicsKind::PPPP
        | DynamicsKind::PPPPP
        | DynamicsKind::MF
        | DynamicsKind::MP
        | DynamicsKind::FP
        | DynamicsKind::SF
        | DynamicsKind::SFZ
        | DynamicsKind::RFZ
        | DynamicsKind::N => LilypondDynamicsCommand::Predefined,

        DynamicsKind::FFFFFF
        | DynamicsKind::PPPPPP
        | DynamicsKind::FZ
        | DynamicsKind::PF
        | DynamicsKind::RF
        | DynamicsKind::SFP
        | DynamicsKind::SFPP
        | DynamicsKind::SFFZ
        | DynamicsKind::SFZP => LilypondDynamicsCommand::MakeDynamicScript,
    }
}

pub fn lilypond_articulation(kind: ArticulationKind) -> Option<LilypondArticulationKind> {
    let articulation = match kind {
        ArticulationKind::Accent => LilypondArticulationKind::Accent,
        ArticulationKind::BreathMark => LilypondArticulationKind::Breathe,
        ArticulationKind::Caesura => LilypondArticulationKind::Caesura,
        ArticulationKind::Spiccato | ArticulationKind::Staccatissimo => LilypondArticulationKind::Staccatissimo,
        ArticulationKind::Staccato => LilypondArticulationKind::Staccato,
        ArticulationKind::DetachedLegato => LilypondArticulationKind::Portato,
        ArticulationKind::StrongAccent => LilypondArticulationKind::Marcato,
        ArticulationKind::Tenuto => LilypondArticulationKind::Tenuto,
        ArticulationKind::Fermata => LilypondArticulationKind::Fermata,
        ArticulationKind::Arpeggiato => LilypondArticulationKind::Arpeggio,
        ArticulationKind::NonArpeggiato => LilypondArticulationKind::ArpeggioBracket,
        ArticulationKind::Doit => LilypondArticulationKind::BendAfterUp,
        ArticulationKind::Falloff => LilypondArticulationKind::BendAfterDown,
        ArticulationKind::Stress
        | ArticulationKind::Unstress
        | ArticulationKind::Plop
        | ArticulationKind::Scoop => return None,
    };
    Some(articulation)
}

/// `has_text` tells whether the source technical carries a text; some
/// kinds are only expressible through it
pub fn lilypond_technical(
    kind: TechnicalKind,
    has_text: bool,
) -> Option<(LilypondTechnicalKind, Option<ScoreFeature>)> {
    let technical = match kind {
        TechnicalKind::Bend => LilypondTechnicalKind::Bend,
        TechnicalKind::DoubleTongue | TechnicalKind::TripleTongue => {
            return Some((LilypondTechnicalKind::Tongue, Some(ScoreFeature::Tongue)))
        }
        TechnicalKind::Damp => return Some((LilypondTechnicalKind::Damp, Some(ScoreFeature::Damp))),
        TechnicalKind::DampAll => {
            return Some((LilypondTechnicalKind::DampAll, Some(ScoreFeature::DampAll)))
        }
        TechnicalKind::DownBow => LilypondTechnicalKind::DownBow,
        TechnicalKind::UpBow => LilypondTechnicalKind::UpBow,
        TechnicalKind::Fingering if has_text => LilypondTechnicalKind::Fingering,
        TechnicalKind::Fret if has_text => LilypondTechnicalKind::Fret,
        TechnicalKind::StringNumber if has_text => LilypondTechnicalKind::StringNumber,
        TechnicalKind::HammerOn => LilypondTechnicalKind::HammerOn,
        TechnicalKind::PullOff => LilypondTechnicalKind::PullOff,
        TechnicalKind::Harmonic => LilypondTechnicalKind::Flageolet,
        TechnicalKind::Heel => LilypondTechnicalKind::LeftHeel,
        TechnicalKind::Toe => LilypondTechnicalKind::LeftToe,
        TechnicalKind::OpenString => LilypondTechnicalKind::Open,
        TechnicalKind::SnapPizzicato => LilypondTechnicalKind::SnapPizzicato,
        TechnicalKind::Stopped => LilypondTechnicalKind::Stopped,
        TechnicalKind::ThumbPosition => LilypondTechnicalKind::Thumb,
        TechnicalKind::OtherTechnical | TechnicalKind::Pluck | TechnicalKind::Tap if has_text => {
            LilypondTechnicalKind::TextMarkup
        }
        TechnicalKind::Fingering
        | TechnicalKind::Fret
        | TechnicalKind::StringNumber
        | TechnicalKind::OtherTechnical
        | TechnicalKind::Pluck
        | TechnicalKind::Tap
        | TechnicalKind::Arrow
        | TechnicalKind::Fingernails
        | TechnicalKind::Handbell
        | TechnicalKind::Hole => return None,
    };
    Some((technical, None))
}

pub fn lilypond_ornament(kind: OrnamentKind) -> Option<LilypondOrnamentKind> {
    let ornament = match kind {
        OrnamentKind::Trill => LilypondOrnamentKind::Trill,
        OrnamentKind::Turn => LilypondOrnamentKind::Turn,
        OrnamentKind::InvertedTurn => LilypondOrnamentKind::ReverseTurn,
        OrnamentKind::DelayedTurn => LilypondOrnamentKind::DelayedTurn,
        OrnamentKind::DelayedInvertedTurn => LilypondOrnamentKind::DelayedReverseTurn,
        OrnamentKind::Mordent => LilypondOrnamentKind::Mordent,
        OrnamentKind::InvertedMordent => LilypondOrnamentKind::Prall,
        OrnamentKind::Shake => LilypondOrnamentKind::PrallPrall,
        OrnamentKind::AccidentalMark => LilypondOrnamentKind::AccidentalMarkup,
        OrnamentKind::Dashes | OrnamentKind::VerticalTurn | OrnamentKind::Schleifer => return None,
    };
    Some(ornament)
}

pub fn lilypond_accidental(kind: AccidentalKind) -> Option<LilypondAccidentalKind> {
    let accidental = match kind {
        AccidentalKind::None => LilypondAccidentalKind::Default,
        AccidentalKind::Sharp => LilypondAccidentalKind::Sharp,
        AccidentalKind::Natural => LilypondAccidentalKind::Natural,
        AccidentalKind::Flat => LilypondAccidentalKind::Flat,
        AccidentalKind::DoubleSharp | AccidentalKind::SharpSharp => LilypondAccidentalKind::DoubleSharp,
        AccidentalKind::FlatFlat => LilypondAccidentalKind::FlatFlat,
        AccidentalKind::QuarterSharp => LilypondAccidentalKind::QuarterSharp,
        AccidentalKind::QuarterFlat => LilypondAccidentalKind::QuarterFlat,
        AccidentalKind::ThreeQuartersSharp => LilypondAccidentalKind::ThreeQuartersSharp,
        AccidentalKind::ThreeQuartersFlat => LilypondAccidentalKind::ThreeQuartersFlat,

        AccidentalKind::NaturalSharp
        | AccidentalKind::NaturalFlat
        | AccidentalKind::SharpDown
        | AccidentalKind::SharpUp
        | AccidentalKind::NaturalDown
        | AccidentalKind::NaturalUp
        | AccidentalKind::FlatDown
        | AccidentalKind::FlatUp
        | AccidentalKind::TripleSharp
        | AccidentalKind::TripleFlat
        | AccidentalKind::SlashQuarterSharp
        | AccidentalKind::SlashSharp
        | AccidentalKind::SlashFlat
        | AccidentalKind::DoubleSlashFlat
        | AccidentalKind::Sharp1
        | AccidentalKind::Sharp2
        | AccidentalKind::Sharp3
        | AccidentalKind::Sharp5
        | AccidentalKind::Flat1
        | AccidentalKind::Flat2
        | AccidentalKind::Flat3
        | AccidentalKind::Flat4
        | AccidentalKind::Sori
        | AccidentalKind::Koron
        | AccidentalKind::Other => return None,
    };
    Some(accidental)
}

pub fn lilypond_wedge(kind: WedgeKind) -> LilypondWedgeKind {
    match kind {
        WedgeKind::Crescendo => LilypondWedgeKind::Crescendo,
        WedgeKind::Diminuendo => LilypondWedgeKind::Decrescendo,
        WedgeKind::Stop => LilypondWedgeKind::Stop,
    }
}

pub fn lilypond_tempo_kind(kind: TempoKind) -> (LilypondTempoKind, Option<ScoreFeature>) {
    match kind {
        TempoKind::Words => (LilypondTempoKind::Text, None),
        TempoKind::BeatUnitsPerMinute => (LilypondTempoKind::Metronome, None),
        TempoKind::BeatUnitsEquivalence => (LilypondTempoKind::Equivalence, None),
        TempoKind::NotesRelationship => {
            (LilypondTempoKind::Relationship, Some(ScoreFeature::TempoRelationship))
        }
    }
}

// ============================================================================
// HARMONY, FIGURED BASS, LYRICS
// ============================================================================

pub fn lilypond_chord_modifier(kind: HarmonyKind) -> Option<LilypondChordModifier> {
    let modifier = match kind {
        HarmonyKind::Major => LilypondChordModifier::Major,
        HarmonyKind::Minor => LilypondChordModifier::Minor,
        HarmonyKind::Augmented => LilypondChordModifier::Augmented,
        HarmonyKind::Diminished => LilypondChordModifier::Diminished,
        HarmonyKind::Dominant => LilypondChordModifier::Dominant,
        HarmonyKind::MajorSeventh => LilypondChordModifier::MajorSeventh,
        HarmonyKind::MinorSeventh => LilypondChordModifier::MinorSeventh,
        HarmonyKind::DiminishedSeventh => LilypondChordModifier::DiminishedSeventh,
        HarmonyKind::AugmentedSeventh => LilypondChordModifier::AugmentedSeventh,
        HarmonyKind::HalfDiminished => LilypondChordModifier::HalfDiminished,
        HarmonyKind::MinorMajorSeventh => LilypondChordModifier::MinorMajorSeventh,
        HarmonyKind::MajorSixth => LilypondChordModifier::MajorSixth,
        HarmonyKind::MinorSixth => LilypondChordModifier::MinorSixth,
        HarmonyKind::DominantNinth => LilypondChordModifier::DominantNinth,
        HarmonyKind::MajorNinth => LilypondChordModifier::MajorNinth,
        HarmonyKind::MinorNinth => LilypondChordModifier::MinorNinth,
        HarmonyKind::DominantEleventh => LilypondChordModifier::DominantEleventh,
        HarmonyKind::MajorEleventh => LilypondChordModifier::MajorEleventh,
        HarmonyKind::MinorEleventh => LilypondChordModifier::MinorEleventh,
        HarmonyKind::DominantThirteenth => LilypondChordModifier::DominantThirteenth,
        HarmonyKind::MajorThirteenth => LilypondChordModifier::MajorThirteenth,
        HarmonyKind::MinorThirteenth => LilypondChordModifier::MinorThirteenth,
        HarmonyKind::SuspendedSecond => LilypondChordModifier::SuspendedSecond,
        HarmonyKind::SuspendedFourth => LilypondChordModifier::SuspendedFourth,
        HarmonyKind::Pedal => LilypondChordModifier::Pedal,
        HarmonyKind::Power => LilypondChordModifier::Power,
        HarmonyKind::None => LilypondChordModifier::NoChord,
        HarmonyKind::Neapolitan
        | HarmonyKind::Italian
        | HarmonyKind::French
        | HarmonyKind::German
        | HarmonyKind::Tristan
        | HarmonyKind::Other => return None,
    };
    Some(modifier)
}

pub fn lilypond_figure_affix(kind: AccidentalKind) -> Option<LilypondFigureAffix> {
    let affix = match kind {
        AccidentalKind::Sharp => LilypondFigureAffix::Sharp,
        AccidentalKind::Flat => LilypondFigureAffix::Flat,
        AccidentalKind::Natural => LilypondFigureAffix::Natural,
        AccidentalKind::DoubleSharp | AccidentalKind::SharpSharp => LilypondFigureAffix::DoubleSharp,
        AccidentalKind::FlatFlat => LilypondFigureAffix::DoubleFlat,
        AccidentalKind::SlashSharp | AccidentalKind::SlashFlat => LilypondFigureAffix::Slashed,
        _ => return None,
    };
    Some(affix)
}

pub fn lilypond_lyric_kind(kind: SyllableKind) -> LilypondLyricKind {
    match kind {
        SyllableKind::Single => LilypondLyricKind::Single,
        SyllableKind::Begin => LilypondLyricKind::Begin,
        SyllableKind::Middle => LilypondLyricKind::Middle,
        SyllableKind::End => LilypondLyricKind::End,
        SyllableKind::Skip => LilypondLyricKind::Skip,
        SyllableKind::MeasureEnd => LilypondLyricKind::BarCheck,
        SyllableKind::LineBreak => LilypondLyricKind::LineBreak,
        SyllableKind::PageBreak => LilypondLyricKind::PageBreak,
    }
}

// ============================================================================
// CONTEXTS
// ============================================================================

pub fn lilypond_staff_context(kind: StaffKind) -> LilypondStaffContext {
    match kind {
        StaffKind::Regular => LilypondStaffContext::Staff,
        StaffKind::Tablature => LilypondStaffContext::TabStaff,
        StaffKind::Drum => LilypondStaffContext::DrumStaff,
        StaffKind::Rhythmic => LilypondStaffContext::RhythmicStaff,
        StaffKind::Harmony => LilypondStaffContext::ChordNames,
        StaffKind::FiguredBass => LilypondStaffContext::FiguredBass,
    }
}

pub fn lilypond_voice_context(voice: VoiceKind, staff: StaffKind) -> LilypondVoiceContext {
    match (voice, staff) {
        (VoiceKind::Harmony, _) => LilypondVoiceContext::ChordNames,
        (VoiceKind::FiguredBass, _) => LilypondVoiceContext::FiguredBass,
        (VoiceKind::Regular, StaffKind::Tablature) => LilypondVoiceContext::TabVoice,
        (VoiceKind::Regular, StaffKind::Drum) => LilypondVoiceContext::DrumVoice,
        (VoiceKind::Regular, _) => LilypondVoiceContext::Voice,
    }
}

pub fn lilypond_group_context(symbol: PartGroupSymbol, barline: bool) -> LilypondGroupContext {
    match symbol {
        PartGroupSymbol::None => LilypondGroupContext::Simultaneous,
        PartGroupSymbol::Brace => LilypondGroupContext::GrandStaff,
        PartGroupSymbol::Bracket if barline => LilypondGroupContext::StaffGroup,
        PartGroupSymbol::Bracket => LilypondGroupContext::ChoirStaff,
        PartGroupSymbol::Line => LilypondGroupContext::StaffGroupLine,
        PartGroupSymbol::Square => LilypondGroupContext::StaffGroupSquare,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clefs_only_drop_none() {
        let unsupported: Vec<ClefKind> = ClefKind::ALL
            .iter()
            .copied()
            .filter(|&kind| lilypond_clef(kind).is_none())
            .collect();
        assert_eq!(unsupported, vec![ClefKind::None]);
        assert_eq!(lilypond_clef(ClefKind::Tablature6), Some((LilypondClefKind::Tab, Some(6))));
        assert_eq!(clef_feature(LilypondClefKind::Jianpu), Some(ScoreFeature::JianpuFile));
    }

    #[test]
    fn test_tongue_and_damp_need_features() {
        assert_eq!(
            lilypond_technical(TechnicalKind::DoubleTongue, false),
            Some((LilypondTechnicalKind::Tongue, Some(ScoreFeature::Tongue)))
        );
        assert_eq!(
            lilypond_technical(TechnicalKind::DampAll, false),
            Some((LilypondTechnicalKind::DampAll, Some(ScoreFeature::DampAll)))
        );
    }

    #[test]
    fn test_fingering_needs_its_text() {
        assert_eq!(lilypond_technical(TechnicalKind::Fingering, false), None);
        assert_eq!(
            lilypond_technical(TechnicalKind::Fingering, true),
            Some((LilypondTechnicalKind::Fingering, None))
        );
    }

    #[test]
    fn test_every_technical_is_handled() {
        for &kind in TechnicalKind::ALL {
            let _ = lilypond_technical(kind, false);
            let _ = lilypond_technical(kind, true);
        }
    }

    #[test]
    fn test_short_barline_needs_feature() {
        assert_eq!(
            lilypond_bar_type(BarlineStyle::Short),
            (LilypondBarType::Short, Some(ScoreFeature::CustomShortBarline))
        );
        assert_eq!(lilypond_bar_type(BarlineStyle::LightHeavy), (LilypondBarType::Final, None));
    }

    #[test]
    fn test_durations_are_total() {
        for &duration in DurationKind::ALL {
            let _ = lilypond_duration_kind(duration);
        }
        assert_eq!(lilypond_duration(DurationKind::Quarter, 1).to_lilypond(), "4.");
        assert_eq!(lilypond_duration(DurationKind::Breve, 0).to_lilypond(), "\\breve");
    }

    #[test]
    fn test_time_styles() {
        assert_eq!(lilypond_time_style(TimeSymbolKind::None), Some(LilypondTimeStyle::Numeric));
        assert_eq!(lilypond_time_style(TimeSymbolKind::Cut), Some(LilypondTimeStyle::Default));
        assert_eq!(lilypond_time_style(TimeSymbolKind::DottedNote), None);
    }

    #[test]
    fn test_unsupported_harmonies() {
        let unsupported = HarmonyKind::ALL
            .iter()
            .filter(|&&kind| lilypond_chord_modifier(kind).is_none())
            .count();
        assert_eq!(unsupported, 6);
    }

    #[test]
    fn test_group_contexts() {
        assert_eq!(lilypond_group_context(PartGroupSymbol::Bracket, true), LilypondGroupContext::StaffGroup);
        assert_eq!(lilypond_group_context(PartGroupSymbol::Bracket, false), LilypondGroupContext::ChoirStaff);
    }

    #[test]
    fn test_triple_alterations_are_unsupported() {
        assert!(!lilypond_supports_alteration(Alteration::TripleSharp));
        assert!(lilypond_supports_alteration(Alteration::SesquiFlat));
    }
}
