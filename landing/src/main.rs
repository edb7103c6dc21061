// TechMentorLab landing page — browser build (Leptos 0.8, CSR)

use std::sync::Arc;

use leptos::prelude::*;
use techmentorlab_catalog::{Catalog, SiteInfo};
use techmentorlab_site::components::SitePage;
use techmentorlab_site::styles::SITE_CSS;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let catalog = Arc::new(Catalog::builtin().clone());
    let year = js_sys::Date::new_0().get_full_year() as i32;

    view! {
        <style>{SITE_CSS}</style>
        <SitePage catalog=catalog site=SiteInfo::default() copyright_year=year />
    }
}
