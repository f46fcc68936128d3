/* USAGE
There is an optional command-line argument:
the directory to patch. If absent, the
REPLACE_BIGINT_DIST environment variable is consulted,
and failing that, the dist directory sibling
to this executable's own directory is used.
*/

use std::env;
use std::path::PathBuf;

use replace_bigint::walk;

fn main () -> Result<(), Box<dyn std::error::Error>> {
  let args: Vec<String> = env::args().collect();

  let dist : PathBuf =
    if args.len() > 1 { // dist from command line, if given
      PathBuf::from ( &args[1] )
    } else if let Ok (d) = env::var ("REPLACE_BIGINT_DIST") {
      PathBuf::from (d)
    } else { default_dist_dir () ? };

  walk::run ( &dist ) }

fn default_dist_dir ()
  -> Result < PathBuf,
              Box<dyn std::error::Error> > {
  let exe : PathBuf = env::current_exe () ?;
  let bin_dir : &std::path::Path =
    exe . parent ()
    . ok_or ( "executable has no parent directory" ) ?;
  Ok ( bin_dir . join ("..") . join ("dist") ) }
