mod compact;
mod errors;
mod rich;
