//! GEO network view: prompts, the content written for them and the AI
//! platforms citing that content, as a Leptos client-side app.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod config;
mod data;
mod graph;
mod pages;
mod store;
mod view;

// Top-Level pages
use crate::config::AppConfig;
use crate::pages::battlefield::Battlefield;
use crate::pages::network::Network;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router with the network and battlefield views, handling 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = AppConfig::from_build_env();
	match &config.api_base {
		Some(base) => info!("reading graph data from {base}"),
		None => info!("no GEO_API_BASE set, using sample data"),
	}
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="GEO Citation Network" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<nav class="top-nav">
				<A href="/">"Network"</A>
				<A href="/battlefield">"Battlefield"</A>
			</nav>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Network />
				<Route path=path!("/battlefield") view=Battlefield />
			</Routes>
		</Router>
	}
}
