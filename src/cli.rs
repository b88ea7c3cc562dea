use reckon::Limits;

#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Maximum expression length, whitespace excluded
    #[arg(long, global = true, env = "RECKON_MAX_LENGTH", default_value_t = Limits::DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Maximum nesting depth of an expression
    #[arg(long, global = true, env = "RECKON_MAX_DEPTH", default_value_t = Limits::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn limits(&self) -> Limits {
        Limits::default()
            .with_max_length(self.max_length)
            .with_max_depth(self.max_depth)
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate an expression and print the result
    Eval { expression: String },

    /// Evaluate every non-empty line of a file
    File { file: std::path::PathBuf },

    /// Print the tokens of an expression
    Tokens { expression: String },

    /// Print the syntax tree of an expression
    Ast { expression: String },
}
