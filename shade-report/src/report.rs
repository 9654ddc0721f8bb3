use log::debug;
use rat_shade::ShadePalette;
use std::io;

/// Writes the text report.
///
/// ```text
/// --- Deep Navy Blue (#0B1F3B) ---
/// 50: #f2f3f5
/// ...
/// 950: #030911
///
/// ```
pub(crate) fn write_report(pals: &[ShadePalette], mut buf: impl io::Write) -> io::Result<()> {
    for pal in pals {
        debug!("report {}", pal.name);
        writeln!(buf, "--- {} ({}) ---", pal.name, pal.base())?;
        for (shade, hex) in pal.iter() {
            writeln!(buf, "{}: {}", shade, hex)?;
        }
        writeln!(buf)?;
    }
    Ok(())
}

/// Writes all palettes as a json array.
pub(crate) fn write_json(pals: &[ShadePalette], mut buf: impl io::Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut buf, pals)?;
    writeln!(buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_json, write_report};
    use rat_shade::{NAMED_COLORS, ShadePalette, named_palettes};

    #[test]
    fn report_navy() {
        let pal = ShadePalette::named("Deep Navy Blue", "#0B1F3B").expect("color");
        let mut buf = Vec::new();
        write_report(&[pal], &mut buf).expect("write");

        let expect = "\
--- Deep Navy Blue (#0B1F3B) ---
50: #f2f3f5
100: #e6e8eb
200: #c2c7ce
300: #9da5b0
400: #546275
500: #0B1F3B
600: #091b35
700: #08172c
800: #061223
900: #040d1a
950: #030911

";
        assert_eq!(String::from_utf8(buf).expect("utf8"), expect);
    }

    #[test]
    fn report_blocks() {
        let pals = named_palettes().expect("table");
        let mut buf = Vec::new();
        write_report(&pals, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");

        let blocks = text.split_terminator("\n\n").collect::<Vec<_>>();
        assert_eq!(blocks.len(), NAMED_COLORS.len());
        for (block, (name, hex)) in blocks.iter().zip(NAMED_COLORS) {
            let mut lines = block.lines();
            assert_eq!(lines.next(), Some(format!("--- {} ({}) ---", name, hex).as_str()));
            let keys = lines
                .map(|l| l.split_once(": ").expect("key").0)
                .collect::<Vec<_>>();
            assert_eq!(
                keys,
                ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"]
            );
        }
        assert!(text.ends_with("950: #090c0f\n\n"));
    }

    #[test]
    fn json_names() {
        let pals = named_palettes().expect("table");
        let mut buf = Vec::new();
        write_json(&pals, &mut buf).expect("write");

        let v: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        let arr = v.as_array().expect("array");
        assert_eq!(arr.len(), 7);
        assert_eq!(arr[0]["name"], "Deep Navy Blue");
        assert_eq!(arr[0]["shade"][5], "#0B1F3B");
        assert_eq!(arr[6]["name"], "Graphite Gray");
    }
}
