mod report;

use crate::report::{write_json, write_report};
use anyhow::{Error, anyhow};
use configparser::ini::{Ini, IniDefault};
use indexmap::IndexMap;
use log::{debug, warn};
use rat_shade::{NAMED_COLORS, palettes_for, store_palettes};
use std::env::{args, temp_dir};
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::process::exit;

fn main() -> Result<(), Error> {
    let arg = parse_arg();

    start_logging(&temp_dir().join("shade-report.log"));

    let config = Config::load(arg)?;

    let mut out = BufWriter::new(stdout().lock());
    run(&config, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Writes the report for the configured colors to out.
fn run(config: &Config, mut out: impl Write) -> Result<(), Error> {
    let pals = palettes_for(config.colors.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
    debug!("{} palettes", pals.len());

    if config.json {
        write_json(&pals, &mut out)?;
    } else {
        write_report(&pals, &mut out)?;
    }

    if let Some(store_path) = &config.store_path {
        debug!("store {:?}", store_path);
        let mut f = BufWriter::new(File::create(store_path)?);
        store_palettes(&pals, &mut f)?;
        f.flush()?;
    }

    Ok(())
}

/// Command line.
#[derive(Debug, Default)]
struct Args {
    colors_path: Option<PathBuf>,
    store_path: Option<PathBuf>,
    json: bool,
}

fn usage() {
    eprintln!("shades [--colors colors.ini] [--store palettes.pal] [--json]");
}

fn parse_arg() -> Args {
    let mut arg = Args::default();

    let mut args = args();
    _ = args.next();

    enum S {
        Start,
        Colors,
        Store,
    }
    let mut s = S::Start;
    for a in args {
        match s {
            S::Start => {
                if a == "--colors" {
                    s = S::Colors;
                } else if a == "--store" {
                    s = S::Store;
                } else if a == "--json" {
                    arg.json = true;
                } else if a == "--help" {
                    usage();
                    eprintln!();
                    eprintln!("Prints the shades 50..950 for each named color.");
                    eprintln!();
                    eprintln!("colors.ini has a [colors] section with name=#rrggbb entries.");
                    eprintln!("--store writes the palettes to a .pal file too.");
                    exit(0);
                } else {
                    usage();
                    exit(1);
                }
            }
            S::Colors => {
                arg.colors_path = Some(a.into());
                s = S::Start;
            }
            S::Store => {
                arg.store_path = Some(a.into());
                s = S::Start;
            }
        }
    }
    if !matches!(s, S::Start) {
        usage();
        exit(1);
    }

    arg
}

/// Configuration.
#[derive(Debug, Default)]
struct Config {
    /// Name -> base color, in report order.
    colors: IndexMap<String, String>,
    store_path: Option<PathBuf>,
    json: bool,
}

impl Config {
    fn load(arg: Args) -> Result<Config, Error> {
        let colors = if let Some(cfg_file) = arg.colors_path {
            debug!("colors from {:?}", cfg_file);
            let mut ini = new_ini();
            match ini.load(&cfg_file) {
                Ok(_) => {}
                Err(e) => {
                    return Err(anyhow!(e));
                }
            }
            colors_from_ini(&ini)?
        } else {
            NAMED_COLORS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };

        Ok(Config {
            colors,
            store_path: arg.store_path,
            json: arg.json,
        })
    }
}

/// Case-sensitive names and no comment stripping,
/// a '#' is part of every color value. Names may contain ':'.
fn new_ini() -> Ini {
    let mut def = IniDefault::default();
    def.case_sensitive = true;
    def.multiline = false;
    def.comment_symbols = vec![];
    def.delimiters = vec!['='];
    Ini::new_from_defaults(def)
}

/// Reads the [colors] section.
fn colors_from_ini(ini: &Ini) -> Result<IndexMap<String, String>, Error> {
    let Some(map) = ini.get_map_ref().get("colors") else {
        return Err(anyhow!("no [colors] section"));
    };

    let mut colors = IndexMap::new();
    for (name, hex) in map {
        let name = name.trim();
        if name.starts_with('#') || name.starts_with(';') {
            continue;
        }
        let Some(hex) = hex else {
            warn!("color {:?} without value", name);
            continue;
        };
        colors.insert(name.to_string(), hex.trim().to_string());
    }
    if colors.is_empty() {
        return Err(anyhow!("[colors] is empty"));
    }
    Ok(colors)
}

/// The log is optional, a failure only gives a warning.
fn start_logging(log_file: &Path) -> bool {
    match setup_logging(log_file) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("shades: no log file {:?}: {}", log_file, e);
            false
        }
    }
}

fn setup_logging(log_file: &Path) -> Result<(), Error> {
    _ = fs::remove_file(log_file);
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{} {}", record.level(), message)) //
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Args, Config, colors_from_ini, new_ini, run, start_logging};
    use rat_shade::NAMED_COLORS;
    use std::env::temp_dir;
    use std::fs;

    fn report(config: &Config) -> String {
        let mut buf = Vec::new();
        run(config, &mut buf).expect("run");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn ini_colors_keep_order() {
        let mut ini = new_ini();
        ini.read(
            "\
[colors]
# comment
Sage Green = #7A8F86
Deep Navy Blue=#0B1F3B
"
            .to_string(),
        )
        .expect("ini");

        let colors = colors_from_ini(&ini).expect("colors");
        let colors = colors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            colors,
            [("Sage Green", "#7A8F86"), ("Deep Navy Blue", "#0B1F3B")]
        );
    }

    #[test]
    fn ini_colon_in_name() {
        let mut ini = new_ini();
        ini.read("[colors]\nA: B=#123456\n".to_string())
            .expect("ini");

        let colors = colors_from_ini(&ini).expect("colors");
        assert_eq!(colors.get("A: B").map(|v| v.as_str()), Some("#123456"));
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn ini_missing_section() {
        let mut ini = new_ini();
        ini.read("[other]\na=#000000\n".to_string()).expect("ini");
        assert!(colors_from_ini(&ini).is_err());
    }

    #[test]
    fn no_args_builtin_table() {
        let config = Config::load(Args::default()).expect("config");
        let colors = config
            .colors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(colors, NAMED_COLORS);

        let txt = report(&config);
        assert!(txt.starts_with("--- Deep Navy Blue (#0B1F3B) ---\n50: #f2f3f5\n"));
    }

    #[test]
    fn colors_file_replaces_table() {
        let path = temp_dir().join(format!("shades-colors-{}.ini", std::process::id()));
        fs::write(&path, "[colors]\nFoo=#123456\n").expect("write");

        let config = Config::load(Args {
            colors_path: Some(path.clone()),
            ..Default::default()
        });
        _ = fs::remove_file(&path);
        let config = config.expect("config");

        let txt = report(&config);
        assert!(txt.starts_with("--- Foo (#123456) ---\n"));
        assert_eq!(txt.matches("---\n").count(), 1);
    }

    #[test]
    fn report_without_log_file() {
        let dir = temp_dir().join(format!("shades-no-dir-{}", std::process::id()));
        _ = fs::remove_dir_all(&dir);

        assert!(!start_logging(&dir.join("shade-report.log")));

        let config = Config::load(Args::default()).expect("config");
        let txt = report(&config);
        assert_eq!(txt.matches("---\n").count(), NAMED_COLORS.len());
    }
}
