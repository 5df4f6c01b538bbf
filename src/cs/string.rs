pub mod word_frequency;
