mod point_set;
mod projector;
