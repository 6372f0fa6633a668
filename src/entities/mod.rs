pub mod ai_product_details;
pub mod category;
pub mod datacenter_cloud_details;
pub mod engagement_block;
pub mod network_hardware_details;
pub mod pricing;
pub mod product;
pub mod section;
pub mod software_details;
pub mod software_plan;
pub mod user;
