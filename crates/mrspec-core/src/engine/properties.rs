use crate::core::input::{UserConfig, WorldUnit};
use crate::core::models::properties::{
    DipoleMomentSpec, GeometricDerivativeSpec, MomentOperatorSpec, NuclearGradientSpec, PlotSpec,
    PlotterSpec, PropertySpec, QuadrupoleMomentSpec,
};

pub fn build_properties(config: &UserConfig) -> PropertySpec {
    let requested = &config.properties;
    let moment = |operator| MomentOperatorSpec {
        operator,
        precision: config.world_prec,
        origin: config.world_origin,
    };

    PropertySpec {
        dipole_moment: requested.dipole_moment.then(|| DipoleMomentSpec {
            dip_1: moment("h_e_dip"),
        }),
        quadrupole_moment: requested.quadrupole_moment.then(|| QuadrupoleMomentSpec {
            quad_1: moment("h_e_quad"),
        }),
        geometric_derivative: requested.geometric_derivative.then(|| GeometricDerivativeSpec {
            geom_1: NuclearGradientSpec {
                operator: "h_nuc_grad",
                precision: config.world_prec,
                smoothing: config.nuclear_prec(),
            },
        }),
    }
}

/// Cube plot request, if any density or orbital plot was asked for.
///
/// Plot ranges given in Ångström are converted to bohr; the grid point counts
/// are left alone.
pub fn build_plot(config: &UserConfig) -> Option<PlotSpec> {
    let requested = &config.properties;
    if !requested.plot_density && requested.plot_orbitals.is_empty() {
        return None;
    }

    let plotter = &config.plotter;
    let scale = match config.world_unit {
        WorldUnit::Angstrom => config.constants.angstrom2bohrs,
        WorldUnit::Bohr => 1.0,
    };
    let to_bohr = |v: [f64; 3]| v.map(|r| r * scale);

    Some(PlotSpec {
        orbitals: requested.plot_orbitals.clone(),
        density: requested.plot_density,
        plotter: PlotterSpec {
            points: plotter.points,
            origin: to_bohr(plotter.origin),
            a: to_bohr(plotter.a),
            b: to_bohr(plotter.b),
            c: to_bohr(plotter.c),
        },
    })
}
