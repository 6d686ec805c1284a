use anyhow::{Context, Result, bail};
use livemark_config::Config;
use livemark_engine::render::html::readable;
use livemark_engine::render::{CaretTarget, EditNode, EditTree, Leaf, export_document, to_html};
use livemark_engine::{Session, io, parse};
use std::path::{Path, PathBuf};
use std::{env, process};

const CARET_MARK: char = '|';

#[derive(Debug, PartialEq)]
enum Command {
    /// Print the clean view as HTML.
    Render { file: PathBuf },
    /// Print the edit view, pattern segments bracketed.
    Edit { file: PathBuf, caret: Option<usize> },
    /// Write a standalone HTML page.
    Export { file: PathBuf, out: Option<PathBuf> },
}

fn parse_args(args: &[String]) -> Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        bail!("missing command");
    };
    let Some((file, flags)) = rest.split_first() else {
        bail!("missing file for '{name}'");
    };
    let file = PathBuf::from(file);

    match (name.as_str(), flags) {
        ("render", []) => Ok(Command::Render { file }),
        ("edit", []) => Ok(Command::Edit { file, caret: None }),
        ("edit", [flag, value]) if flag == "--caret" => {
            let caret = value
                .parse()
                .with_context(|| format!("invalid caret offset '{value}'"))?;
            Ok(Command::Edit {
                file,
                caret: Some(caret),
            })
        }
        ("export", []) => Ok(Command::Export { file, out: None }),
        ("export", [flag, value]) if flag == "--out" => Ok(Command::Export {
            file,
            out: Some(PathBuf::from(value)),
        }),
        _ => bail!("unrecognised arguments for '{name}'"),
    }
}

/// One row per line; pattern leaves in brackets, the caret as `|`.
fn edit_view_lines(tree: &EditTree, caret: Option<CaretTarget>) -> Vec<String> {
    tree.lines
        .iter()
        .map(|line| {
            let mut out = String::new();
            for node in &line.children {
                push_edit_node(node, caret, &mut out);
            }
            out
        })
        .collect()
}

fn push_edit_node(node: &EditNode, caret: Option<CaretTarget>, out: &mut String) {
    match node {
        EditNode::Styled { children, .. } => {
            for child in children {
                push_edit_node(child, caret, out);
            }
        }
        EditNode::Pattern(leaf) => {
            out.push('[');
            push_leaf(leaf, caret, out);
            out.push(']');
        }
        EditNode::Text(leaf) | EditNode::Break(leaf) => push_leaf(leaf, caret, out),
    }
}

fn push_leaf(leaf: &Leaf, caret: Option<CaretTarget>, out: &mut String) {
    match caret {
        Some(target) if target.leaf == leaf.id => {
            for (i, c) in leaf.text.chars().enumerate() {
                if i == target.offset {
                    out.push(CARET_MARK);
                }
                out.push(c);
            }
            if target.offset == leaf.width() {
                out.push(CARET_MARK);
            }
        }
        _ => out.push_str(&leaf.text),
    }
}

/// `--out` if given, else `<output_dir>/<stem>.html`, else next to the source.
fn export_path(file: &Path, out: Option<PathBuf>, config: &Config) -> PathBuf {
    if let Some(out) = out {
        return out;
    }
    let name = file.with_extension("html");
    if let Some(dir) = &config.export.output_dir
        && let Some(file_name) = name.file_name()
    {
        return dir.join(file_name);
    }
    name
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { file } => {
            let text = io::read_file(&file)?;
            let rendered = parse(&text, None);
            print!("{}", readable(&to_html(&rendered.clean)));
        }
        Command::Edit { file, caret } => {
            let text = io::read_file(&file)?;
            let rendered = parse(&text, caret);
            for line in edit_view_lines(&rendered.edit, rendered.caret) {
                println!("{line}");
            }
            if let Some(position) = rendered.caret_position {
                log::info!(
                    "caret at row {}, column {} (visible offset {})",
                    position.row,
                    position.column,
                    position.offset
                );
            }
        }
        Command::Export { file, out } => {
            let config = Config::load()
                .context("Failed to load config file")?
                .unwrap_or_default();
            let mut session = Session::open(&file)?;
            let rendered = session.render();
            let title = file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let page = export_document(&title, &config.export.stylesheet, &rendered.clean);

            let out = export_path(&file, out, &config);
            io::write_file(&out, &page)?;
            log::info!("exported {} to {}", file.display(), out.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("livemark-cli", String::as_str);

    match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => run(command),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} render <file>");
            eprintln!("       {program} edit <file> [--caret <offset>]");
            eprintln!("       {program} export <file> [--out <path>]");
            eprintln!("Config file: {}", Config::config_path().display());
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livemark_config::ExportConfig;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_args(&args(&["render", "a.md"])).unwrap(),
            Command::Render {
                file: PathBuf::from("a.md")
            }
        );
        assert_eq!(
            parse_args(&args(&["edit", "a.md", "--caret", "4"])).unwrap(),
            Command::Edit {
                file: PathBuf::from("a.md"),
                caret: Some(4)
            }
        );
        assert_eq!(
            parse_args(&args(&["export", "a.md", "--out", "x.html"])).unwrap(),
            Command::Export {
                file: PathBuf::from("a.md"),
                out: Some(PathBuf::from("x.html"))
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["render"])).is_err());
        assert!(parse_args(&args(&["edit", "a.md", "--caret", "x"])).is_err());
        assert!(parse_args(&args(&["render", "a.md", "--out", "x"])).is_err());
        assert!(parse_args(&args(&["publish", "a.md"])).is_err());
    }

    #[test]
    fn test_edit_view_brackets_patterns_and_marks_caret() {
        let rendered = parse("# Hi\n**b** c", Some(7));
        assert_eq!(
            edit_view_lines(&rendered.edit, rendered.caret),
            vec!["[# ]Hi".to_string(), "[**]|b[**] c".to_string()]
        );
    }

    #[test]
    fn test_edit_view_caret_on_empty_line() {
        let rendered = parse("a\n\nb", Some(2));
        assert_eq!(
            edit_view_lines(&rendered.edit, rendered.caret),
            vec!["a".to_string(), "|".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_export_path() {
        let config = Config::default();
        assert_eq!(
            export_path(Path::new("notes/a.md"), None, &config),
            PathBuf::from("notes/a.html")
        );

        let config = Config {
            export: ExportConfig {
                output_dir: Some(PathBuf::from("/srv/site")),
                ..ExportConfig::default()
            },
        };
        assert_eq!(
            export_path(Path::new("notes/a.md"), None, &config),
            PathBuf::from("/srv/site/a.html")
        );
        assert_eq!(
            export_path(Path::new("a.md"), Some(PathBuf::from("b.html")), &config),
            PathBuf::from("b.html")
        );
    }
}
