//! Book block assembly
//!
//! The part group blocks built during the walk are laid out as `\book`
//! blocks according to the requested score output kind.

use crate::lpsr::{BookBlock, BookBlockElement, BookPartBlock, PartBlock, PartGroupBlock, ScoreBlock};
use crate::translators::options::ScoreOutputKind;

pub(super) fn assemble_book_blocks(kind: ScoreOutputKind, part_groups: &[PartGroupBlock]) -> Vec<BookBlock> {
    let score = || ScoreBlock {
        part_groups: part_groups.to_vec(),
    };
    let parts: Vec<PartBlock> = part_groups
        .iter()
        .flat_map(|group| group.part_blocks())
        .cloned()
        .collect();

    let score_book = || BookBlock {
        elements: vec![BookBlockElement::Score(score())],
    };
    let part_books = || parts.iter().map(part_book).collect::<Vec<_>>();
    let score_book_part = || {
        BookBlockElement::BookPart(BookPartBlock {
            part_id: None,
            part: None,
            score: Some(score()),
        })
    };
    let part_book_parts = || parts.iter().map(part_book_part).collect::<Vec<_>>();

    log::debug!("LPSR: {} parts laid out as {:?}", parts.len(), kind);
    match kind {
        ScoreOutputKind::Score => vec![score_book()],
        ScoreOutputKind::Parts => part_books(),
        ScoreOutputKind::ScoreAndParts => {
            let mut books = vec![score_book()];
            books.extend(part_books());
            books
        }
        ScoreOutputKind::PartsAndScore => {
            let mut books = part_books();
            books.push(score_book());
            books
        }
        ScoreOutputKind::ScoreAndPartsOneFile => {
            let mut elements = vec![score_book_part()];
            elements.extend(part_book_parts());
            vec![BookBlock { elements }]
        }
        ScoreOutputKind::PartsAndScoreOneFile => {
            let mut elements = part_book_parts();
            elements.push(score_book_part());
            vec![BookBlock { elements }]
        }
        ScoreOutputKind::PartsOneFile => vec![BookBlock {
            elements: part_book_parts(),
        }],
    }
}

fn part_book_part(part: &PartBlock) -> BookBlockElement {
    BookBlockElement::BookPart(BookPartBlock {
        part_id: Some(part.part_id.clone()),
        part: Some(part.clone()),
        score: None,
    })
}

fn part_book(part: &PartBlock) -> BookBlock {
    BookBlock {
        elements: vec![part_book_part(part)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lpsr::{LilypondGroupContext, PartGroupBlockElement};

    fn two_parts() -> Vec<PartGroupBlock> {
        let part = |id: &str| PartBlock {
            part_id: id.to_string(),
            part_name: None,
            context: None,
            elements: Vec::new(),
        };
        vec![PartGroupBlock {
            name: "1".to_string(),
            context: LilypondGroupContext::Simultaneous,
            elements: vec![
                PartGroupBlockElement::Part(part("P1")),
                PartGroupBlockElement::Part(part("P2")),
            ],
        }]
    }

    #[test]
    fn test_score_and_parts_gives_three_books() {
        let books = assemble_book_blocks(ScoreOutputKind::ScoreAndParts, &two_parts());
        assert_eq!(books.len(), 3);
        assert!(matches!(books[0].elements[0], BookBlockElement::Score(_)));
        assert!(matches!(
            &books[2].elements[0],
            BookBlockElement::BookPart(book_part) if book_part.part_id.as_deref() == Some("P2")
        ));
    }

    #[test]
    fn test_parts_and_score_one_file_ends_with_score() {
        let books = assemble_book_blocks(ScoreOutputKind::PartsAndScoreOneFile, &two_parts());
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].elements.len(), 3);
        assert!(matches!(
            &books[0].elements[2],
            BookBlockElement::BookPart(book_part) if book_part.score.is_some() && book_part.part.is_none()
        ));
    }

    #[test]
    fn test_parts_one_file_has_no_score() {
        let books = assemble_book_blocks(ScoreOutputKind::PartsOneFile, &two_parts());
        assert_eq!(books.len(), 1);
        assert!(books[0].elements.iter().all(|element| matches!(
            element,
            BookBlockElement::BookPart(book_part) if book_part.score.is_none()
        )));
    }
}
