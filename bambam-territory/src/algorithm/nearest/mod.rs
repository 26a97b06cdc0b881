mod nearest_reducer;

pub use nearest_reducer::reduce_nearest;
