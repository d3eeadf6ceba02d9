use anyhow::Result;
use snewton::{ diag, grid, units, utils };

// scan the enclosing radius of the initial Gaussian profile against halo
// half-width, on the fiducial grid; writes CSV to stdout
//
// a saturated row means the fiducial domain no longer contains the halo at
// that width

const N: usize = 300;
const DR: f64 = 1e20; // m

fn main() -> Result<()> {
    let gridspec = grid::GridSpec::new(N, DR, 0, 1.0)?;
    println!("width_kpc,r99_kpc,fraction,saturated");
    for w in (5..=50).step_by(5) {
        let a = w as f64 * units::kpc;
        let q = utils::gaussian_profile(&gridspec, a);
        let er = diag::enclosed_radius(&q, gridspec.dr, diag::R99);
        println!("{},{:.4},{:.6},{}",
            w, units::to_kpc(er.radius), er.fraction, er.saturated);
    }
    Ok(())
}
