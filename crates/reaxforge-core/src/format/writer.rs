use crate::model::document::ForceFieldDocument;
use crate::model::section::{Row, Section, SectionKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("non-numeric value in the {section} section: '{value}' is not an integer")]
    NonNumericInt { section: SectionKind, value: String },
    #[error("non-numeric value in the {section} section: '{value}' is not a float")]
    NonNumericFloat { section: SectionKind, value: String },
    #[error(
        "row in the {section} section is too short for its {required} fixed leading fields ({found} tokens present)"
    )]
    ShortRow {
        section: SectionKind,
        required: usize,
        found: usize,
    },
}

/// Renders a document back to fixed-column-width ReaxFF text.
///
/// The output is the verbatim header followed by the seven sections in file
/// order, every row terminated by a single newline. The document's structure
/// is trusted as-is; only per-value numeric conversion is validated, and any
/// conversion failure aborts with no partial output.
pub fn format(document: &ForceFieldDocument) -> Result<String, FormatError> {
    let mut out = String::new();
    out.push_str(&document.header);
    out.push('\n');
    for section in document.sections() {
        for (index, row) in section.rows.iter().enumerate() {
            out.push_str(&render_row(section, index, row)?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn render_row(section: &Section, index: usize, row: &Row) -> Result<String, FormatError> {
    let kind = section.kind;
    if index < kind.preamble_rows() {
        return render_preamble_row(kind, index, row);
    }

    let body_index = index - kind.preamble_rows();
    match kind {
        SectionKind::General => {
            let value = leading_float(kind, row)?;
            Ok(format!("{:10.4} {}", value, row[1..].join(" ")))
        }
        SectionKind::OneBody => {
            if body_index % 4 == 0 {
                let label = row.first().ok_or(FormatError::ShortRow {
                    section: kind,
                    required: 1,
                    found: 0,
                })?;
                Ok(format!(" {:<2}{}", label, float_run(kind, &row[1..])?))
            } else {
                Ok(format!("   {}", float_run(kind, row)?))
            }
        }
        SectionKind::TwoBody => {
            if body_index % 2 == 0 {
                render_indexed_row(kind, row, 2)
            } else {
                Ok(format!("      {}", float_run(kind, row)?))
            }
        }
        SectionKind::OffDiagonal | SectionKind::ThreeBody | SectionKind::FourBody
        | SectionKind::HydrogenBond => {
            // index_fields is Some for every indexed section kind.
            let fields = kind.index_fields().unwrap_or(0);
            render_indexed_row(kind, row, fields)
        }
    }
}

fn render_preamble_row(kind: SectionKind, index: usize, row: &Row) -> Result<String, FormatError> {
    if index == 0 {
        let count = leading_int(kind, row)?;
        let rest = row[1..].join(" ");
        return Ok(match kind {
            SectionKind::General => format!(" {:2}        {}", count, rest),
            _ => format!("{:3}    {}", count, rest),
        });
    }
    Ok(format!("            {}", row.join(" ")))
}

fn render_indexed_row(kind: SectionKind, row: &Row, fields: usize) -> Result<String, FormatError> {
    if row.len() < fields {
        return Err(FormatError::ShortRow {
            section: kind,
            required: fields,
            found: row.len(),
        });
    }
    let mut line = String::new();
    for token in &row[..fields] {
        let value: i64 = token.parse().map_err(|_| FormatError::NonNumericInt {
            section: kind,
            value: token.clone(),
        })?;
        line.push_str(&format!("{:3}", value));
    }
    line.push_str(&float_run(kind, &row[fields..])?);
    Ok(line)
}

fn float_run(kind: SectionKind, tokens: &[String]) -> Result<String, FormatError> {
    let mut run = String::new();
    for token in tokens {
        let value: f64 = token.parse().map_err(|_| FormatError::NonNumericFloat {
            section: kind,
            value: token.clone(),
        })?;
        run.push_str(&format!("{:9.4}", value));
    }
    Ok(run)
}

fn leading_int(kind: SectionKind, row: &Row) -> Result<i64, FormatError> {
    let token = row.first().ok_or(FormatError::ShortRow {
        section: kind,
        required: 1,
        found: 0,
    })?;
    token.parse().map_err(|_| FormatError::NonNumericInt {
        section: kind,
        value: token.clone(),
    })
}

fn leading_float(kind: SectionKind, row: &Row) -> Result<f64, FormatError> {
    let token = row.first().ok_or(FormatError::ShortRow {
        section: kind,
        required: 1,
        found: 0,
    })?;
    token.parse().map_err(|_| FormatError::NonNumericFloat {
        section: kind,
        value: token.clone(),
    })
}
