use log::debug;

use crate::{Backend, Camera, Engine};

macro_rules! passes {
    ([ $( $name:ident => $class:ident, )* ]) => {
        $( mod $name; )*
        $( pub use self::$name::*; )*

        #[derive(Debug)]
        pub struct CameraPasses {
            $( pub $name: $class, )*
        }

        impl CameraPasses {
            pub fn new<B>(engine: &Engine<B>, camera: &Camera) -> Self
            where
                B: Backend,
            {
                debug!("Initializing camera passes");

                Self {
                    $( $name: $class::new(engine, camera), )*
                }
            }
        }
    };
}

passes!([
    di_resolving => DiResolvingPass,
    di_sampling => DiSamplingPass,
    di_shading => DiShadingPass,
    di_spatial_resampling => DiSpatialResamplingPass,
    di_temporal_resampling => DiTemporalResamplingPass,
    prim_raster => PrimRasterPass,
]);
