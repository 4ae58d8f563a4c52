pub mod artist;
pub mod classroom;
pub mod drink;
pub mod show;
pub mod trivia;
pub mod venue;

pub use artist::Artist;
pub use classroom::{Answer, ClassroomQuestion};
pub use drink::{Drink, RecipeItem};
pub use show::{Show, ShowListing};
pub use trivia::{Category, TriviaQuestion};
pub use venue::{Venue, VenueSummary};
