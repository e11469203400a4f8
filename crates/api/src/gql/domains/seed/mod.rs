mod resolvers;

pub use resolvers::SeedMutation;
