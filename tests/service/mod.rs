mod order;
mod tracking;
