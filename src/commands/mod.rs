pub mod cat;
pub mod cd;
pub mod clear;
pub mod contact;
pub mod date;
pub mod help;
pub mod leetcode;
pub mod ls;
pub mod theme;
pub mod welcome;
