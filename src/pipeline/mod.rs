pub mod stage1_output;
pub mod stage2_render;
