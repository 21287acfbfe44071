//! arabic-math CLI - Arabic math notation translator

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;

#[cfg(feature = "cli")]
use arabic_math::{
    analyze_latex_structure, check_bracket_balance, detect_expression_type, extract_variables,
    tokenize, validate, ArabicMath, ArabicMathError, ArabicMathOptions, MemoryTarget,
    RenderMode, Result,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "arabic-math")]
#[command(version)]
#[command(about = "Translate Latin/LaTeX math notation into Arabic notation", long_about = None)]
struct Cli {
    /// Subcommand to run (translate by default)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Options file (JSON, or TOML with a .toml extension)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    stages: StageFlags,
}

/// Overrides applied on top of the config file.
#[cfg(feature = "cli")]
#[derive(Args, Default)]
struct StageFlags {
    /// Keep ASCII digits
    #[arg(long, global = true)]
    no_numbers: bool,

    /// Keep function names
    #[arg(long, global = true)]
    no_functions: bool,

    /// Keep variable letters and Greek names
    #[arg(long, global = true)]
    no_variables: bool,

    /// Keep arrow directions
    #[arg(long, global = true)]
    no_arrows: bool,

    /// Translate `\command` tokens too
    #[arg(long, global = true)]
    latex_commands: bool,

    /// Run the structural RTL transform (fractions, bounds, matrices, brackets)
    #[arg(long, global = true)]
    apply_rtl: bool,

    /// Do not wrap Arabic runs in bidi controls
    #[arg(long, global = true)]
    no_rtl_wrap: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Translate an equation (default action)
    Translate {
        /// Input file path
        input: Option<String>,
    },

    /// Check bracket and brace balance
    Validate {
        /// Input file path
        input: Option<String>,
    },

    /// Detect the expression kind and report its structure
    Classify {
        /// Input file path
        input: Option<String>,
    },

    /// Print the token stream
    Tokenize {
        /// Input file path
        input: Option<String>,
    },

    /// List single-letter variables
    Variables {
        /// Input file path
        input: Option<String>,
    },

    /// List every bracket error, escaped brackets included
    Balance {
        /// Input file path
        input: Option<String>,
    },

    /// Prepare an equation for a typesetting engine
    Render {
        /// Input file path
        input: Option<String>,

        /// Target engine
        #[arg(short, long, value_enum, default_value_t = Engine::None)]
        engine: Engine,

        /// Inline instead of display math
        #[arg(long)]
        inline: bool,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Engine {
    /// Plain text
    None,
    /// MathJax delimiters
    Mathjax,
    /// Raw TeX for KaTeX
    Katex,
}

#[cfg(feature = "cli")]
impl From<Engine> for RenderMode {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::None => RenderMode::None,
            Engine::Mathjax => RenderMode::MathJax,
            Engine::Katex => RenderMode::Katex,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {}", err);
        std::process::exit(2);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<()> {
    let mut options = match cli.config {
        Some(ref path) => load_config(Path::new(path))?,
        None => ArabicMathOptions::default(),
    };
    apply_flags(&mut options, &cli.stages);

    let command = cli.command.unwrap_or(Commands::Translate {
        input: cli.input_file,
    });

    let (output, failed) = match command {
        Commands::Translate { input } => {
            let text = read_input(input.as_deref())?;
            let math = ArabicMath::new(options);
            let out = math.translate(text.trim_end_matches(['\r', '\n']));
            if cli.json {
                (to_json(&serde_json::json!({ "output": out }))?, false)
            } else {
                (out, false)
            }
        }

        Commands::Validate { input } => {
            let text = read_input(input.as_deref())?;
            let result = validate(&text);
            let failed = !result.valid;
            let out = if cli.json {
                to_json(&result)?
            } else {
                let mut lines = vec![if result.valid { "valid" } else { "invalid" }.to_string()];
                lines.extend(result.errors.iter().map(|e| format!("error: {}", e)));
                lines.extend(result.warnings.iter().map(|w| format!("warning: {}", w)));
                lines.join("\n")
            };
            (out, failed)
        }

        Commands::Classify { input } => {
            let text = read_input(input.as_deref())?;
            let kind = detect_expression_type(&text);
            let out = if cli.json {
                to_json(&serde_json::json!({
                    "type": kind,
                    "structure": analyze_latex_structure(&text),
                }))?
            } else {
                kind.to_string()
            };
            (out, false)
        }

        Commands::Tokenize { input } => {
            let text = read_input(input.as_deref())?;
            let tokens = tokenize(&text);
            let out = if cli.json {
                to_json(&tokens)?
            } else {
                tokens
                    .iter()
                    .map(|t| format!("{:>4}  {:<14} {}", t.offset, t.kind.to_string(), t.text))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            (out, false)
        }

        Commands::Variables { input } => {
            let text = read_input(input.as_deref())?;
            let vars = extract_variables(&text);
            let out = if cli.json { to_json(&vars)? } else { vars.join(" ") };
            (out, false)
        }

        Commands::Balance { input } => {
            let text = read_input(input.as_deref())?;
            let balance = check_bracket_balance(&text);
            let failed = !balance.balanced;
            let out = if cli.json {
                to_json(&balance)?
            } else if balance.balanced {
                "balanced".to_string()
            } else {
                balance
                    .errors
                    .iter()
                    .map(|e| format!("{:?}", e))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            (out, failed)
        }

        Commands::Render {
            input,
            engine,
            inline,
        } => {
            let text = read_input(input.as_deref())?;
            options.math_renderer = engine.into();
            options.display_mode = !inline;
            let math = ArabicMath::new(options);
            let mut target = MemoryTarget::new();
            let job = math.render(Some(&mut target), text.trim_end_matches(['\r', '\n']))?;
            let out = if cli.json { to_json(&job)? } else { job.text };
            (out, false)
        }
    };

    write_output(cli.output.as_deref(), &output)?;
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn apply_flags(options: &mut ArabicMathOptions, flags: &StageFlags) {
    let stages = &mut options.translate;
    stages.translate_numbers &= !flags.no_numbers;
    stages.translate_functions &= !flags.no_functions;
    stages.translate_variables &= !flags.no_variables;
    stages.flip_arrows &= !flags.no_arrows;
    stages.translate_latex_commands |= flags.latex_commands;
    stages.apply_rtl |= flags.apply_rtl;
    options.rtl &= !flags.no_rtl_wrap;
}

/// Read options from a JSON or TOML file.
#[cfg(feature = "cli")]
fn load_config(path: &Path) -> Result<ArabicMathOptions> {
    let content = fs::read_to_string(path)?;
    let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
    let options = if is_toml {
        toml::from_str(&content).map_err(|e| ArabicMathError::config(e.to_string()))?
    } else {
        serde_json::from_str(&content)?
    };
    log::debug!("loaded options from {}", path.display());
    Ok(options)
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", content)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install arabic-math --features cli");
    eprintln!("  arabic-math [OPTIONS] [INPUT_FILE]");
}
