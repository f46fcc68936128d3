// Applies the rewriter to every .js file under a directory,
// writing back only the files whose text changed.

use std::error::Error;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::rewrite::rewrite_bigint_literals;

pub fn is_js_file (
  path : &Path )
  -> bool {
  path . extension ()
    . map_or ( false, |ext| ext == "js" ) }

pub fn patch_js_tree (
  // Visits dist depth-first, rewrites each .js file,
  // and overwrites it in place if anything changed.
  // Returns how many files were patched.
  dist : &Path )
  -> Result < usize, Box<dyn Error> > {

  let mut patched_count : usize = 0;
  for entry in WalkDir::new ( dist )
    . into_iter () . filter_map ( Result::ok ) {
      if !entry . file_type () . is_file () {
        continue; } // recurse into, but never rewrite, directories
      let path : &Path = entry . path ();
      if !is_js_file ( path ) {
        continue; }
      let src : String = fs::read_to_string ( path ) ?;
      let out : String = rewrite_bigint_literals ( &src );
      if out != src {
        fs::write ( path, &out ) ?;
        println! ( "patched BigInt in {}",
                   path . display () );
        patched_count += 1; } }
  Ok ( patched_count ) }

pub fn run (
  dist : &Path )
  -> Result < (), Box<dyn Error> > {
  if !dist . exists () {
    eprintln! (
      "dist directory not found, skipping replace-bigint" );
    return Ok (( )); } // nothing to do is not a failure
  patch_js_tree ( dist ) ?;
  println! ( "replace-bigint completed" );
  Ok (( )) }
