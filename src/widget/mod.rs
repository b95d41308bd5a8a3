pub mod horizontal_slider;
