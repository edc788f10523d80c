// Terminal rendering of batch results.
//
// User-facing output goes through println!, separate from the tracing
// log stream. Results print in the order they completed.

use colored::{ColoredString, Colorize};

use crate::pipeline::article::{AnalysisResult, ProcessingStatus};

fn colored_status(status: ProcessingStatus) -> ColoredString {
    match status {
        ProcessingStatus::Ok => status.as_str().green(),
        ProcessingStatus::Timeout => status.as_str().yellow(),
        ProcessingStatus::FetchError | ProcessingStatus::ParsingError => status.as_str().red(),
    }
}

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate:.2}"),
        None => "-".to_string(),
    }
}

/// Print one block per result.
pub fn print_results(results: &[AnalysisResult]) {
    for result in results {
        println!("Address {}", result.address);
        println!("  status      {}", colored_status(result.status));
        println!("  words count {}", result.words_count);
        println!("  +rate       {}", format_rate(result.pos_rate));
        println!("  -rate       {}", format_rate(result.neg_rate));
        println!("  time        {:.2} sec", result.time);
    }
}
