use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, bail, Result};
use rouille::{Request, Response, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use productsite::accesslog;
use productsite::handler::FileHandler;
use productsite::http_method::RequestMethod;
use productsite::http_status::HttpStatus;
use productsite::nav::{Nav, NavEntry};
use productsite::router::Router;
use productsite::routes::{contacts_handler, home_handler, products_handler};
use productsite::site_layout::SiteLayout;
use productsite::store::AnimalStore;
use productsite::users::users_api_handler;
use productsite::util::getenv_or;
use productsite::webparts::SiteAssets;
use productsite::webutils::{error_response, errorpage_from_status};

// ------------------------------------------------------------------

const NAV: &[NavEntry] = &[
    NavEntry {
        label: "Index",
        path: "./",
    },
    NavEntry {
        label: "Productos",
        path: "./products",
    },
    NavEntry {
        label: "About",
        path: "./about",
    },
];

const ASSETS: SiteAssets = SiteAssets {
    description: "Sitio de demostración: productos renderizados en el servidor",
    favicon: "favicon.svg",
    font_preconnects: &[
        ("https://fonts.googleapis.com", false),
        ("https://fonts.gstatic.com", true),
    ],
    font_stylesheet: "https://fonts.googleapis.com/css2?family=Overpass:ital,wght@0,100..900;\
                      1,100..900&display=swap",
    stylesheets: &["guide.css", "main.css"],
    client_script: "index.js",
    logo: "./assets/logo.png",
};

// -----------------------------------------------------------------------------
// Main

fn handle_request(request: &Request, router: &Router) -> Response {
    let start = Instant::now();
    let response = match RequestMethod::maybe_from(request.method()) {
        None => errorpage_from_status(HttpStatus::NotImplemented501),
        Some(method) => match router.handle(request, method) {
            Ok(Some(response)) => response,
            Ok(None) => errorpage_from_status(HttpStatus::NotFound404),
            Err(err) => error_response(&err),
        },
    };
    accesslog::log_request(request, response.status_code, start.elapsed());
    response
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PRODUCTSITE_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let listen_addr = getenv_or("LISTEN", "127.0.0.1:3000")?;
    let publicdir = getenv_or("PUBLICDIR", "public")?;
    let datafile = getenv_or("DATAFILE", "data/animals.json")?;

    info!(target: "server", "starting up");

    let store = Arc::new(AnimalStore::load(&datafile)?);
    let layout = Arc::new(SiteLayout {
        site_name: "Demo Products",
        copyright_owner: "JuananDesign",
        copyright_from: 2025,
        nav: Nav(NAV),
        assets: ASSETS,
    });

    let mut router = Router::new();
    router
        .add("/", home_handler(layout.clone()))
        .add("/about", home_handler(layout.clone()))
        .add("/products", products_handler(layout.clone(), store.clone()))
        .add("/contacts", contacts_handler())
        .add("/api/users", users_api_handler())
        .add("/", Arc::new(FileHandler::new(publicdir)));
    let router = Arc::new(router);

    let server = Server::new(listen_addr.clone(), move |request| {
        handle_request(request, &router)
    })
    .map_err(|e| anyhow!("starting server on {listen_addr}: {e}"))?;
    info!(target: "server", "Server listening on http://{}", server.server_addr());
    server.run();
    bail!("Server stopped.")
}
