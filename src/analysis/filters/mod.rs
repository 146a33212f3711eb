pub mod stopword;
