pub mod stage0_discover;
pub mod stage1_threshold;
pub mod stage2_trace;
pub mod stage3_annotate;
pub mod stage4_resize;

pub use stage0_discover::*;
pub use stage1_threshold::*;
pub use stage2_trace::*;
pub use stage3_annotate::*;
pub use stage4_resize::*;
