pub mod stage1_load;
pub mod stage2_aggregate;
pub mod stage3_scene;
pub mod stage4_report;
