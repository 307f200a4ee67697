pub mod command;
pub mod refresh_token;
pub mod tag;
pub mod user;

pub use command::PostgresCommandRepository;
pub use refresh_token::PostgresRefreshTokenRepository;
pub use tag::PostgresTagRepository;
pub use user::PostgresUserRepository;
