pub mod concurrent_map;
pub mod batch;

/// How an operation iterates its work: on the calling thread, or across the
/// rayon pool. Every operation accepting a policy has identical observable
/// results under both, up to floating-point summation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionPolicy {
    #[default]
    Sequential,
    Parallel,
}
