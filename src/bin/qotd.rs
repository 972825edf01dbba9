//! Terminal front-end for the question card.
//!
//! Drives [`QuestionView`] against a running server and prints each state
//! change the card would render: loading, the question once it fades in, or
//! the error text.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use qotd::view::{FadeTimings, HttpQuestionApi, QuestionView, ViewState};

#[derive(Parser, Debug)]
#[command(name = "qotd", about = "Ask the question-of-the-day server for questions")]
struct Cli {
    #[arg(long, env = "QOTD_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Narrow the question to a subject.
    #[arg(long)]
    topic: Option<String>,

    /// Number of generation cycles to run.
    #[arg(long, default_value_t = 1)]
    count: u32,

    #[arg(long, default_value_t = 300)]
    fade_out_ms: u64,

    #[arg(long, default_value_t = 100)]
    fade_in_ms: u64,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), qotd::view::ApiError> {
    let api = HttpQuestionApi::new(&cli.base_url)?;
    let timings =
        FadeTimings { fade_out: Duration::from_millis(cli.fade_out_ms), fade_in: Duration::from_millis(cli.fade_in_ms) };
    let view = Arc::new(QuestionView::new(Arc::new(api), timings));

    if let Some(topic) = cli.topic.as_deref() {
        view.toggle_topic_input();
        view.set_topic(topic);
    }

    let mut updates = view.subscribe();
    let printer = tokio::spawn(async move {
        let mut last = String::new();
        while updates.changed().await.is_ok() {
            let line = render(&updates.borrow_and_update());
            if !line.is_empty() && line != last {
                println!("{line}");
                last = line;
            }
        }
    });

    for _ in 0..cli.count {
        view.generate().await;
    }

    view.close();
    drop(view);
    let _ = printer.await;
    Ok(())
}

fn render(state: &ViewState) -> String {
    if let Some(error) = &state.error {
        return format!("! {error}");
    }
    if let Some(question) = &state.displayed_question {
        return format!("? {question}");
    }
    if state.is_loading {
        return "... generating".to_string();
    }
    String::new()
}
