use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use herodex_common::db::Database;
use std::process::{ExitCode, Termination};
use utoipa::OpenApi;

mod db;
mod sample_data;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Manage the database
    Db(db::Run),
}

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "herodexd",
    long_about = None
)]
pub struct Herodexd {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    /// Seed sample data on startup and allow any origin
    #[arg(long, env)]
    pub devmode: bool,

    /// The address to listen on
    #[arg(long, env = "HTTP_SERVER_BIND_ADDR", default_value = "::1")]
    pub bind_addr: String,

    /// The port to listen on
    #[arg(short = 'p', long, env = "HTTP_SERVER_BIND_PORT", default_value_t = 8080)]
    pub bind_port: u16,

    /// Origins allowed to call the API from a browser; empty allows any
    #[arg(long, env = "CORS_ALLOW_ORIGIN")]
    pub cors_allow_origin: Vec<String>,

    #[command(flatten)]
    pub database: herodex_common::config::Database,
}

impl Herodexd {
    async fn run(self) -> ExitCode {
        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        if let Some(command) = self.command {
            return match command {
                Command::Db(run) => run.run().await,
            };
        }

        let db = Database::new(&self.database).await?;

        if self.devmode {
            sample_data::sample_data(&db).await?;
        }

        let devmode = self.devmode;
        let origins = self.cors_allow_origin.clone();

        log::info!("listening on {}:{}", self.bind_addr, self.bind_port);

        HttpServer::new(move || {
            let cors = if devmode || origins.is_empty() {
                Cors::permissive()
            } else {
                origins
                    .iter()
                    .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                    .allow_any_method()
                    .allow_any_header()
            };

            let db = db.clone();
            App::new()
                .wrap(middleware::Logger::default())
                .wrap(cors)
                .configure(|svc| herodex_module_fundamental::configure(svc, db.clone()))
                .route("/openapi.json", web::get().to(openapi))
        })
        .bind((self.bind_addr.as_str(), self.bind_port))?
        .run()
        .await?;

        Ok(ExitCode::SUCCESS)
    }
}

async fn openapi() -> impl Responder {
    HttpResponse::Ok().json(herodex_module_fundamental::ApiDoc::openapi())
}

#[actix_web::main]
async fn main() -> impl Termination {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    Herodexd::parse().run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Herodexd::command().debug_assert();
    }
}
