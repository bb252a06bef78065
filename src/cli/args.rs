use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Maximum essence fragments kept per scroll
    #[arg(long)]
    pub k_modes: Option<usize>,

    /// Softmax sharpness for recall attention
    #[arg(long)]
    pub beta_focus: Option<f64>,

    /// Decay rate per day since last access
    #[arg(long)]
    pub gamma_decay: Option<f64>,

    /// Relevance boost for scrolls sharing a theme with the query
    #[arg(long)]
    pub theme_boost: Option<f64>,

    /// Overwrite an existing state file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompressArgs {
    /// Message text (repeatable, in order). Reads stdin lines when omitted.
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub message: Vec<String>,

    /// Segment timestamp (defaults to now)
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Primary theme (defaults to the first detected theme)
    #[arg(long)]
    pub theme: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RecallArgs {
    /// Query text
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'n', default_value_t = 3)]
    pub top: usize,

    /// Time of recall (defaults to now)
    #[arg(long)]
    pub at: Option<String>,

    /// Only consider scrolls carrying this theme
    #[arg(long)]
    pub theme: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Scroll id
    pub id: usize,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Time used for vitality (defaults to now)
    #[arg(long)]
    pub at: Option<String>,
}
