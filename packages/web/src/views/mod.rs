mod public_layout;
pub use public_layout::PublicLayout;

mod home;
pub use home::Home;

mod fundraisers;
pub use fundraisers::Fundraisers;

mod donate;
pub use donate::{Donate, DonateCampaign};

mod login;
pub use login::Login;

mod register;
pub use register::Signup;

mod auth_callback;
pub use auth_callback::AuthCallback;

mod admin_layout;
pub use admin_layout::AdminLayout;

mod admin;
pub use admin::{AdminCampaignList, AdminSettings, Analytics, CreateCampaign, Dashboard};

mod not_found;
pub use not_found::NotFound;
