mod category;
mod review;
mod user;
