//! Download link domain entities.

pub mod ip_rule;
pub mod model;
pub mod policy;
pub mod user_rule;
pub mod visibility;

pub use ip_rule::{CreateIpRule, DownloadLinkIpAddress};
pub use model::{CreateDownloadLink, DownloadLink};
pub use policy::IpPolicy;
pub use user_rule::DownloadLinkUser;
pub use visibility::Visibility;
