use notation_translator::bsr::BrailleKeyKind;
use notation_translator::msr::*;
use notation_translator::tables::braille::*;
use notation_translator::tables::braille_values::braille_note_value;
use notation_translator::tables::lilypond::*;

/// Source values a table maps to nothing
fn unsupported<T: Copy, U>(all: &[T], map: impl Fn(T) -> Option<U>) -> Vec<T> {
    all.iter().copied().filter(|&value| map(value).is_none()).collect()
}

#[test]
fn test_every_step_and_duration_is_handled() {
    let steps = std::iter::once(None).chain(DiatonicPitch::ALL.iter().copied().map(Some));
    for step in steps {
        let missing = unsupported(DurationKind::ALL, |duration| braille_note_value(step, duration));
        assert_eq!(
            missing,
            vec![
                DurationKind::D1024th,
                DurationKind::D512th,
                DurationKind::Long,
                DurationKind::Maxima
            ],
            "step {:?}",
            step
        );
    }
}

#[test]
fn test_rest_and_step_values_differ() {
    for &duration in DurationKind::ALL {
        let rest = braille_note_value(None, duration);
        if rest.is_some() {
            assert_ne!(rest, braille_note_value(Some(DiatonicPitch::C), duration));
        }
    }
}

#[test]
fn test_every_key_is_handled() {
    let mut supported = 0;
    for &step in DiatonicPitch::ALL {
        for &alteration in Alteration::ALL {
            for &mode in KeyMode::ALL {
                if let Some((_, count)) = braille_key(Pitch::new(step, alteration), mode) {
                    assert!(count <= 7, "{:?} {:?} {:?} gives {} accidentals", step, alteration, mode, count);
                    supported += 1;
                }
            }
        }
    }
    assert!(supported > 30, "only {} keys supported", supported);
}

#[test]
fn test_church_modes_on_natural_tonics_only() {
    assert_eq!(
        braille_key(Pitch::natural(DiatonicPitch::D), KeyMode::Dorian),
        Some((BrailleKeyKind::Naturals, 0))
    );
    assert_eq!(
        braille_key(Pitch::new(DiatonicPitch::D, Alteration::Sharp), KeyMode::Dorian),
        None
    );
}

#[test]
fn test_braille_tables_cover_their_sources() {
    assert_eq!(
        unsupported(ClefKind::ALL, braille_clef_kind),
        vec![
            ClefKind::None,
            ClefKind::TrebleMinus15,
            ClefKind::TreblePlus15,
            ClefKind::BassMinus15,
            ClefKind::BassPlus15,
            ClefKind::Tablature4,
            ClefKind::Tablature5,
            ClefKind::Tablature6,
            ClefKind::Tablature7,
            ClefKind::Percussion,
            ClefKind::Jianpu,
        ]
    );
    assert_eq!(
        unsupported(TimeSymbolKind::ALL, braille_time_kind),
        vec![TimeSymbolKind::SenzaMisura]
    );

    for &style in BarlineStyle::ALL {
        for &category in BarlineCategory::ALL {
            let _ = braille_barline(style, category);
        }
    }
    let _ = unsupported(AccidentalKind::ALL, braille_accidental_kind);
    let _ = unsupported(DynamicsKind::ALL, braille_dynamics_kind);
}

#[test]
fn test_lilypond_tables_cover_their_sources() {
    assert_eq!(unsupported(ClefKind::ALL, lilypond_clef), vec![ClefKind::None]);
    assert!(lilypond_accidental(AccidentalKind::Natural).is_some());
    for &kind in TechnicalKind::ALL {
        let _ = lilypond_technical(kind, true);
        let _ = lilypond_technical(kind, false);
    }
    for &kind in DurationKind::ALL {
        let _ = lilypond_duration(kind, 0);
    }
    let _ = unsupported(HarmonyKind::ALL, lilypond_chord_modifier);
    let _ = unsupported(OrnamentKind::ALL, lilypond_ornament);
    let _ = unsupported(ArticulationKind::ALL, lilypond_articulation);
}
