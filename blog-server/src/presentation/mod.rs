pub mod dto;
pub mod handlers;
pub mod middleware;

#[cfg(test)]
mod tests;
