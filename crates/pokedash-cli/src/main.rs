//! Pokedash CLI - render a dashboard to SVG or serve it over HTTP.

use clap::{Parser, Subcommand};
use pokedash::{Dashboard, Filter, Message, Size};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tiny_http::{Header, Response, Server};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pokedash")]
#[command(about = "Pokemon data dashboard - bar, quadrant and parallel charts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard to an SVG file
    Render {
        /// Path to the CSV dataset
        #[arg(long, default_value = "pokemon.csv")]
        data: PathBuf,

        /// Output SVG path
        #[arg(long, default_value = "dashboard.svg")]
        out: PathBuf,

        /// Viewport width in pixels
        #[arg(long, default_value_t = 1280.0)]
        width: f32,

        /// Viewport height in pixels
        #[arg(long, default_value_t = 800.0)]
        height: f32,
    },

    /// Serve the dashboard over HTTP, re-rendering per request
    Serve {
        /// Path to the CSV dataset
        #[arg(long, default_value = "pokemon.csv")]
        data: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            data,
            out,
            width,
            height,
        } => render(&data, &out, width, height),
        Commands::Serve { data, addr } => serve(&data, &addr),
    }
}

fn load(data: &Path, viewport: Size) -> Result<Dashboard, ExitCode> {
    let mut dashboard = Dashboard::new(viewport);
    let command = dashboard.apply(Message::LoadRequested {
        path: data.to_path_buf(),
    });
    dashboard.run(command);
    if let Some(message) = &dashboard.state().error {
        error!("{message}");
        return Err(ExitCode::FAILURE);
    }
    let count = dashboard.state().records.as_ref().map_or(0, Vec::len);
    info!(records = count, "dataset loaded from {}", data.display());
    Ok(dashboard)
}

fn render(data: &Path, out: &Path, width: f32, height: f32) -> ExitCode {
    let dashboard = match load(data, Size::new(width, height)) {
        Ok(dashboard) => dashboard,
        Err(code) => return code,
    };
    let svg = dashboard.render_svg();
    if let Err(source) = fs::write(out, &svg) {
        error!("failed to write {}: {source}", out.display());
        return ExitCode::FAILURE;
    }
    info!(bytes = svg.len(), "wrote {}", out.display());
    ExitCode::SUCCESS
}

fn serve(data: &Path, addr: &str) -> ExitCode {
    let dashboard = match load(data, Size::new(1280.0, 800.0)) {
        Ok(dashboard) => dashboard,
        Err(code) => return code,
    };

    let server = match Server::http(addr) {
        Ok(server) => server,
        Err(source) => {
            error!("failed to bind {addr}: {source}");
            return ExitCode::FAILURE;
        }
    };
    info!("serving dashboard on http://{addr}");

    for request in server.incoming_requests() {
        let query = Query::parse(request.url());
        debug!(url = request.url(), "request");

        let mut view = dashboard.clone();
        view.apply(Message::Resize {
            width: query.width,
            height: query.height,
        });
        if let Some(category) = &query.filter {
            let filter = if category == "All" {
                Filter::All
            } else {
                Filter::Category(category.clone())
            };
            view.apply(Message::FilterChanged(filter));
        }

        let page = html_page(&view);
        let header = Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
            .expect("static header");
        let _ = request.respond(Response::from_string(page).with_header(header));
    }
    ExitCode::SUCCESS
}

/// Query parameters understood by the server.
struct Query {
    width: f32,
    height: f32,
    filter: Option<String>,
}

impl Query {
    fn parse(url: &str) -> Self {
        let mut query = Self {
            width: 1280.0,
            height: 800.0,
            filter: None,
        };
        let Some((_, raw)) = url.split_once('?') else {
            return query;
        };
        for pair in raw.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "width" => {
                    if let Ok(width) = value.parse() {
                        query.width = width;
                    }
                }
                "height" => {
                    if let Ok(height) = value.parse() {
                        query.height = height;
                    }
                }
                "filter" => query.filter = Some(value.to_string()),
                _ => {}
            }
        }
        query
    }
}

fn html_page(dashboard: &Dashboard) -> String {
    let links: String = dashboard
        .state()
        .filter_options()
        .iter()
        .map(|option| format!("<a href=\"/?filter={option}\">{option}</a> "))
        .collect();
    format!(
        concat!(
            "<!DOCTYPE html>\n<html><head><title>Pokedash</title></head>\n",
            "<body style=\"margin:0\">\n",
            "<nav style=\"font-family:sans-serif;font-size:12px;padding:4px\">Filter: {}</nav>\n",
            "{}</body></html>\n"
        ),
        links,
        dashboard.render_svg()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_without_parameters() {
        let query = Query::parse("/");
        assert_eq!(query.width, 1280.0);
        assert_eq!(query.height, 800.0);
        assert_eq!(query.filter, None);
    }

    #[test]
    fn query_parses_dimensions_and_filter() {
        let query = Query::parse("/?width=1024&height=768&filter=Water");
        assert_eq!(query.width, 1024.0);
        assert_eq!(query.height, 768.0);
        assert_eq!(query.filter.as_deref(), Some("Water"));
    }

    #[test]
    fn query_ignores_malformed_pairs() {
        let query = Query::parse("/?width=abc&oops&filter=Fire");
        assert_eq!(query.width, 1280.0);
        assert_eq!(query.filter.as_deref(), Some("Fire"));
    }
}
