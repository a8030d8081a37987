use seokit::commands::analyzer_command;
use seokit::handlers::handle_seo_analyzer;
use seokit::{exit_on_usage_error, init_tracing};

fn main() {
    let matches = analyzer_command()
        .try_get_matches()
        .unwrap_or_else(|e| exit_on_usage_error(e));

    init_tracing(matches.get_flag("verbose"));
    handle_seo_analyzer(&matches);
}
