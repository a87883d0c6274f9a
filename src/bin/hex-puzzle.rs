use hexudoku::gen::new_puzzle;
use std::env;

/// Generates one puzzle from a seed and prints it along with its solution.
fn main() {
  env_logger::init();
  let args: Vec<String> = env::args().collect();
  assert_eq!(3, args.len(), "usage: {} <seed> <cells-to-blank>", args[0]);
  let seed = args[1]
    .parse::<u64>()
    .unwrap_or_else(|_| panic!("seed (`{}`) must be a non-negative integer", args[1]));
  let blanks = args[2].parse::<i32>().unwrap_or_else(|_| {
    panic!(
      "cells-to-blank (`{}`) must be an integer",
      args[2]
    )
  });
  let desc = new_puzzle(blanks, seed);
  println!("Puzzle ({} clues):\n{:?}\n", desc.puzzle.len(), desc.puzzle);
  println!("Solution:\n{:?}", desc.solution);
}
