use seokit::commands::sitemap_command;
use seokit::handlers::handle_generate_sitemap;
use seokit::{exit_on_usage_error, init_tracing};

fn main() {
    let matches = sitemap_command()
        .try_get_matches()
        .unwrap_or_else(|e| exit_on_usage_error(e));

    init_tracing(matches.get_flag("verbose"));
    handle_generate_sitemap(&matches);
}
