use std::path::Path;

use anyhow::{Context, bail};
use tokio::io::AsyncReadExt;

/// Reads the whole input from `path`, or stdin when it is `None` or `-`.
pub async fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Splits on whitespace and commas and parses every token as a number.
pub fn parse_numbers(raw: &str) -> anyhow::Result<Vec<f64>> {
    let mut values = Vec::new();
    for (position, token) in raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
    {
        let Ok(value) = token.parse::<f64>() else {
            bail!("value #{} ('{}') is not a number", position + 1, token);
        };
        if value.is_nan() {
            bail!("value #{} is NaN", position + 1);
        }
        values.push(value);
    }
    Ok(values)
}
