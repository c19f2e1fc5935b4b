use crate::model::document::ForceFieldDocument;
use crate::model::section::{Row, Section, SectionKind};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(
        "malformed count line for the {section} section (line {line}): '{token}' is not an unsigned integer"
    )]
    MalformedCount {
        section: SectionKind,
        line: usize,
        token: String,
    },
    #[error(
        "truncated {section} section: {required} lines required from line {line}, {available} available"
    )]
    Truncated {
        section: SectionKind,
        line: usize,
        required: usize,
        available: usize,
    },
}

/// Parses ReaxFF parameter text into a [`ForceFieldDocument`].
///
/// Line 0 is kept verbatim as the header. The seven section blocks are then
/// read in fixed order; each block spans `mult * (n + 1)` lines, where `n`
/// is the integer declared by the first token of the block's count line.
/// A structural error aborts the parse with no partial document.
pub fn parse(text: &str) -> Result<ForceFieldDocument, ParseError> {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut document = ForceFieldDocument::empty();
    document.header = lines.first().copied().unwrap_or_default().to_string();

    // Fold over the fixed section order, threading the line cursor through
    // each block read.
    let mut cursor = 1usize;
    for kind in SectionKind::ALL {
        let (section, next) = parse_section(&lines, cursor, kind)?;
        *document.section_mut(kind) = section;
        cursor = next;
    }
    Ok(document)
}

fn parse_section(
    lines: &[&str],
    cursor: usize,
    kind: SectionKind,
) -> Result<(Section, usize), ParseError> {
    let count_line = lines.get(cursor).ok_or(ParseError::Truncated {
        section: kind,
        line: cursor + 1,
        required: kind.mult(),
        available: 0,
    })?;

    let token = count_line.split_whitespace().next().unwrap_or_default();
    let count: usize = token.parse().map_err(|_| ParseError::MalformedCount {
        section: kind,
        line: cursor + 1,
        token: token.to_string(),
    })?;

    let required = kind.mult() * (count + 1);
    let available = lines.len() - cursor;
    if available < required {
        return Err(ParseError::Truncated {
            section: kind,
            line: cursor + 1,
            required,
            available,
        });
    }

    let rows: Vec<Row> = lines[cursor..cursor + required]
        .iter()
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect();

    Ok((Section::new(kind, rows), cursor + required))
}

impl FromStr for ForceFieldDocument {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = concat!(
        "Reactive MD-force field: hydrocarbon test\n",
        " 2       ! Number of general parameters\n",
        "   50.0000 !Overcoordination parameter 1\n",
        "    9.5469 !Overcoordination parameter 2\n",
        "  1    ! Nr of atoms; cov.r; valency;a.m;Rvdw;Evdw;gammaEEM;cov.r2;#\n",
        "            alfa;gammavdW;valency;Eunder;Eover;chiEEM;etaEEM;n.u.\n",
        "            cov r3;Elp;Heat inc.;n.u.;n.u.;n.u.;n.u.\n",
        "            ov/un;val1;n.u.;val3,vval4\n",
        " C    1.3817   4.0000  12.0000   1.8903   0.1838   0.9000   1.1341   4.0000\n",
        "     9.7559   2.1346   4.0000  34.9350  79.5548   5.9666   7.0000   0.0000\n",
        "     1.2114   0.0000 202.5551   8.9539  34.9289  13.5366   0.8563   0.0000\n",
        "    -2.8983   2.5000   1.0564   4.0000   2.9663   0.0000   0.0000   0.0000\n",
        "  1      ! Nr of bonds; Edis1;LPpen;n.u.;pbe1;pbo5;13corr;pbo6\n",
        "            pbe2;pbo3;pbo4;n.u.;pbo1;pbo2;ovcorr\n",
        "  1  1 158.2004  99.1897  78.0000  -0.7738  -0.4550   1.0000  37.6117   0.4147\n",
        "        0.4590  -0.1000   9.1628   1.0000  -0.0777   6.7268   1.0000   0.0000\n",
        "  1    ! Nr of off-diagonal terms; Ediss;Ro;gamma;rsigma;rpi;rpi2\n",
        "  1  2   0.1239   1.4004   9.8467   1.1210   1.1548   1.0000\n",
        "  1    ! Nr of angles;at1;at2;at3;Thetao,o;ka;kb;pv1;pv2\n",
        "  1  1  1  59.0573  30.7029   0.7606   0.0000   0.7180   6.2933   1.1244\n",
        "  1    ! Nr of torsions;at1;at2;at3;at4;V1;V2;V3;V2(BO);vconj\n",
        "  1  1  1  1  -0.2500  34.7453   0.0288  -6.3507  -1.6000   0.0000   0.0000\n",
        "  1    ! Nr of hydrogen bonds;at1;at2;at3;Rhb;Dehb;vhb1\n",
        "  3  2  3   2.1200  -3.5800   1.4500\n",
    );

    #[test]
    fn splits_all_seven_sections() {
        let doc = parse(SAMPLE).unwrap();
        assert_eq!(doc.general.rows.len(), 3);
        assert_eq!(doc.onebody.rows.len(), 8);
        assert_eq!(doc.twobody.rows.len(), 4);
        assert_eq!(doc.offdiagonal.rows.len(), 2);
        assert_eq!(doc.threebody.rows.len(), 2);
        assert_eq!(doc.fourbody.rows.len(), 2);
        assert_eq!(doc.hbond.rows.len(), 2);
    }

    #[test]
    fn block_length_matches_declared_count() {
        let doc = parse(SAMPLE).unwrap();
        for section in doc.sections() {
            let count = section.declared_count().unwrap();
            assert_eq!(section.rows.len(), section.kind.mult() * (count + 1));
        }
    }

    #[test]
    fn header_is_preserved_verbatim() {
        let doc = parse(SAMPLE).unwrap();
        assert_eq!(doc.header, "Reactive MD-force field: hydrocarbon test");
    }

    #[test]
    fn rows_are_whitespace_tokenized() {
        let doc = parse(SAMPLE).unwrap();
        assert_eq!(doc.general.rows[1][0], "50.0000");
        assert_eq!(doc.onebody.items()[0][0], "C");
        assert_eq!(doc.twobody.items()[0][..2], ["1", "1"]);
        assert_eq!(doc.hbond.items()[0][..3], ["3", "2", "3"]);
    }

    #[test]
    fn blank_lines_count_toward_the_block_length() {
        let input = SAMPLE.replace("   50.0000 !Overcoordination parameter 1", "");
        let doc = parse(&input).unwrap();
        assert_eq!(doc.general.rows.len(), 3);
        assert!(doc.general.rows[1].is_empty());
        // The following sections still land on their count lines.
        assert_eq!(doc.hbond.rows.len(), 2);
    }

    #[test]
    fn truncated_section_is_rejected() {
        let input = "Header line\n 5   ! general parameters\n   1.0000 p1\n   2.0000 p2\n";
        match parse(input) {
            Err(ParseError::Truncated {
                section, required, ..
            }) => {
                assert_eq!(section, SectionKind::General);
                assert_eq!(required, 6);
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn truncation_in_a_later_section_names_that_section() {
        let input = SAMPLE.trim_end_matches('\n');
        let shortened = &input[..input.rfind('\n').unwrap()];
        match parse(shortened) {
            Err(ParseError::Truncated { section, .. }) => {
                assert_eq!(section, SectionKind::HydrogenBond);
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let input = "Header line\nabc   ! general parameters\n";
        match parse(input) {
            Err(ParseError::MalformedCount { section, token, .. }) => {
                assert_eq!(section, SectionKind::General);
                assert_eq!(token, "abc");
            }
            other => panic!("expected MalformedCount, got {:?}", other),
        }
    }

    #[test]
    fn negative_count_is_rejected() {
        let input = "Header line\n -1   ! general parameters\n";
        assert!(matches!(
            parse(input),
            Err(ParseError::MalformedCount { token, .. }) if token == "-1"
        ));
    }

    #[test]
    fn blank_count_line_is_rejected() {
        let input = "Header line\n\n";
        assert!(matches!(
            parse(input),
            Err(ParseError::MalformedCount { token, .. }) if token.is_empty()
        ));
    }

    #[test]
    fn missing_count_line_is_reported_as_truncation() {
        match parse("Header line") {
            Err(ParseError::Truncated {
                section, available, ..
            }) => {
                assert_eq!(section, SectionKind::General);
                assert_eq!(available, 0);
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn documents_parse_via_from_str() {
        let doc: ForceFieldDocument = SAMPLE.parse().unwrap();
        assert_eq!(doc.onebody.declared_count(), Some(1));
    }
}
