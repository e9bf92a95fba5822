/// Helm adapters - release inspection through the helm CLI
mod helm_cli_inspector;
mod output_parser;

pub use helm_cli_inspector::HelmCliInspector;
