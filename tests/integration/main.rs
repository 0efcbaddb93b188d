mod helpers;
mod lifecycle;
mod resize;
