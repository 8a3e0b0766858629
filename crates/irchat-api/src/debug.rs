use colored::Colorize;

use irchat_core::ChatRequest;

const MAX_BODY_CHARS: usize = 5000;

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Print the outgoing request (console output, verbose mode only)
pub fn log_request(url: &str, request: &ChatRequest, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        println!("{}: {}", "URL".bright_yellow(), url);
        println!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
        println!(
            "{}: {}",
            "Port".bright_yellow(),
            parsed_url
                .port_or_known_default()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );
    } else {
        println!("{}: {}", "URL".bright_yellow(), url);
    }

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(request) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
}

/// Print the raw response (console output, verbose mode only)
pub fn log_response(status: reqwest::StatusCode, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    let status_line = format!("{}", status);
    let status_line = if status.is_success() {
        status_line.green()
    } else {
        status_line.red()
    };

    println!("{}: {}", "Status".bright_yellow(), status_line);
    println!("{}", "Response Body:".bright_yellow());
    if body.chars().count() > MAX_BODY_CHARS {
        println!("{}", safe_truncate(body, MAX_BODY_CHARS));
        println!("{}", format!("... (truncated, total {} bytes)", body.len()).bright_black());
    } else {
        println!("{}", body);
    }
    println!("{}\n", "═".repeat(80).bright_cyan());
}
