/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: helm CLI, kubeconfig
/// files, the drift API and the console.
pub mod outbound;
