//! Smoke command handler.
//!
//! Exercises a running gateway the way a chat frontend would: checks
//! readiness, then sends one direct and one templated prompt.

use std::time::Duration;

use anyhow::{Result, bail};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

/// Characters of each reply shown in the report.
const PREVIEW_CHARS: usize = 100;

/// Timing knobs for a smoke run.
#[derive(Debug, Clone)]
pub struct SmokeOptions {
    /// Gateway base URL, without trailing slash.
    pub base_url: String,
    /// Timeout for `GET /status`.
    pub status_timeout: Duration,
    /// Timeout for `POST /generate` and `POST /chat`.
    pub request_timeout: Duration,
    /// Wait before the single readiness retry.
    pub retry_delay: Duration,
}

impl SmokeOptions {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            status_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            retry_delay: Duration::from_secs(10),
        }
    }
}

/// Outcome of a smoke run. Prompt steps are `None` when readiness failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmokeReport {
    pub ready: bool,
    pub generate: Option<bool>,
    pub chat: Option<bool>,
}

impl SmokeReport {
    pub fn passed(&self) -> bool {
        self.ready && self.generate == Some(true) && self.chat == Some(true)
    }
}

/// Execute the smoke command, failing when any step failed.
pub async fn execute(base_url: &str) -> Result<()> {
    let report = run(&SmokeOptions::new(base_url)).await?;
    if !report.passed() {
        bail!("smoke test failed against {base_url}");
    }
    Ok(())
}

/// Run every step and print a summary.
pub async fn run(opts: &SmokeOptions) -> Result<SmokeReport> {
    let client = Client::builder().build()?;

    println!("Testing gemma gateway at {}", opts.base_url);
    println!("{}", "=".repeat(50));

    let mut ready = check_status(&client, opts).await;
    if !ready {
        println!();
        println!(
            "Model not ready yet. Waiting {} seconds...",
            opts.retry_delay.as_secs()
        );
        tokio::time::sleep(opts.retry_delay).await;
        ready = check_status(&client, opts).await;
        if !ready {
            println!("Model still not ready. Please check your setup.");
            return Ok(SmokeReport {
                ready,
                generate: None,
                chat: None,
            });
        }
    }

    let generate = check_generate(&client, opts).await;
    let chat = check_chat(&client, opts).await;

    println!();
    println!("{}", "=".repeat(50));
    println!("Results:");
    println!("Direct (/generate):  {}", verdict(generate));
    println!("Templated (/chat):   {}", verdict(chat));

    let report = SmokeReport {
        ready,
        generate: Some(generate),
        chat: Some(chat),
    };
    if report.passed() {
        println!();
        println!("All checks passed.");
    } else {
        println!();
        println!("Some checks failed. Check the gateway logs.");
    }
    Ok(report)
}

const fn verdict(ok: bool) -> &'static str {
    if ok { "PASS" } else { "FAIL" }
}

/// First [`PREVIEW_CHARS`] characters of `text`.
fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

async fn check_status(client: &Client, opts: &SmokeOptions) -> bool {
    println!("Checking /status...");
    let result = client
        .get(format!("{}/status", opts.base_url))
        .timeout(opts.status_timeout)
        .send()
        .await;

    let response = match result {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            println!("  Status check failed: {}", r.status());
            return false;
        }
        Err(e) => {
            println!("  Status check error: {e}");
            return false;
        }
    };

    match response.json::<Value>().await {
        Ok(body) => {
            let status = body["status"].as_str().unwrap_or("unknown");
            println!("  Status: {status}");
            if let Some(model) = body["model"].as_str() {
                println!("  Model: {model}");
            }
            status == "ready"
        }
        Err(e) => {
            println!("  Status check error: {e}");
            false
        }
    }
}

async fn post_prompt(client: &Client, opts: &SmokeOptions, path: &str, body: &Value) -> Option<Value> {
    let result = client
        .post(format!("{}{path}", opts.base_url))
        .json(body)
        .timeout(opts.request_timeout)
        .send()
        .await;

    let response = match result {
        Ok(r) => r,
        Err(e) => {
            println!("  {path} error: {e}");
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        println!("  {path} failed: {status}");
        println!("  Response: {text}");
        return None;
    }

    match response.json::<Value>().await {
        Ok(value) => {
            debug!(path, "Smoke reply decoded");
            Some(value)
        }
        Err(e) => {
            println!("  {path} error: {e}");
            None
        }
    }
}

async fn check_generate(client: &Client, opts: &SmokeOptions) -> bool {
    println!();
    println!("Checking direct endpoint (/generate)...");
    let body = json!({"prompt": "Hello, what is your name?"});
    let Some(reply) = post_prompt(client, opts, "/generate", &body).await else {
        return false;
    };

    let text = reply["response"].as_str().unwrap_or("No response");
    println!("  Response: {}...", preview(text));
    true
}

async fn check_chat(client: &Client, opts: &SmokeOptions) -> bool {
    println!();
    println!("Checking templated endpoint (/chat)...");
    let body = json!({"message": "Hello, what model are you?", "use_template": true});
    let Some(reply) = post_prompt(client, opts, "/chat", &body).await else {
        return false;
    };

    let text = reply["response"].as_str().unwrap_or("No response");
    println!("  Response: {}...", preview(text));
    println!("  Method: {}", reply["method"].as_str().unwrap_or("unknown"));
    println!("  Model: {}", reply["model"].as_str().unwrap_or("unknown"));
    true
}
