use crate::totals::ViolationTotals;
use std::borrow::Cow;
use std::io::{self, Write};

/// Writes the `<violations>` document, one element per entry, in the order
/// the totals are already in.
pub fn write_report<W: Write>(totals: &ViolationTotals, sink: &mut W) -> io::Result<()> {
    sink.write_all(b"<violations>\n")?;
    for (violation_type, fine_amount) in totals.iter() {
        writeln!(
            sink,
            "    <violation type=\"{}\" fine_amount=\"{}\" />",
            escape_attribute(violation_type),
            format_amount(fine_amount)
        )?;
    }
    sink.write_all(b"</violations>\n")?;
    Ok(())
}

/// Shortest text that reads back as the same value, always with a
/// fractional part (`125.0`, `75.5`).
pub fn format_amount(amount: f64) -> String {
    format!("{amount:?}")
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totals::fold_into;
    use crate::violation::ViolationRecord;

    fn render(totals: &ViolationTotals) -> String {
        let mut out = Vec::new();
        write_report(totals, &mut out).expect("write to vec");
        String::from_utf8(out).expect("utf8 report")
    }

    #[test]
    fn writes_fixed_layout() {
        let totals = fold_into(
            &[
                ViolationRecord::new("PARKING", 75.5),
                ViolationRecord::new("SPEEDING", 150.0),
            ],
            ViolationTotals::new(),
        )
        .sort_descending();

        assert_eq!(
            render(&totals),
            "<violations>\n    <violation type=\"SPEEDING\" fine_amount=\"150.0\" />\n    <violation type=\"PARKING\" fine_amount=\"75.5\" />\n</violations>\n"
        );
    }

    #[test]
    fn empty_totals_write_only_root() {
        assert_eq!(render(&ViolationTotals::new()), "<violations>\n</violations>\n");
    }

    #[test]
    fn amounts_keep_a_fractional_digit() {
        assert_eq!(format_amount(125.0), "125.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(1200.25), "1200.25");
    }

    #[test]
    fn escapes_markup_in_types() {
        assert_eq!(escape_attribute("SPEEDING"), "SPEEDING");
        assert_eq!(
            escape_attribute("RED \"LIGHT\" & <STOP>"),
            "RED &quot;LIGHT&quot; &amp; &lt;STOP&gt;"
        );
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failure_is_returned() {
        let err = write_report(&ViolationTotals::new(), &mut FailingSink).unwrap_err();
        assert_eq!(err.to_string(), "sink closed");
    }
}
