pub mod leaderboard;
pub mod login;
pub mod not_found;
pub mod runner;

#[cfg(feature = "web")]
pub use leaderboard::LeaderBoard;
#[cfg(feature = "web")]
pub use login::Login;
#[cfg(feature = "web")]
pub use not_found::NotFound;
#[cfg(feature = "web")]
pub use runner::Runner;
