use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::Context;
    use clap::{Parser, Subcommand, ValueEnum};
    use gfx_math::{
        Matrix4, Vector4,
        angle::{Degrees, Radians},
        camera,
        layout::{ColumnMajor, MatrixLayout, RowMajor},
    };
    use log::{debug, warn};

    #[derive(Debug, Parser)]
    #[command(about = "The graphics math kernel", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the results of the basic vector and matrix operations for a
        /// fixed set of operands
        Demo,
        /// Print the view matrix for a camera
        LookAt {
            /// Camera position
            #[arg(
                long,
                num_args = 3,
                value_names = ["X", "Y", "Z"],
                allow_negative_numbers = true,
                required = true
            )]
            eye: Vec<f32>,

            /// Point the camera looks towards
            #[arg(
                long,
                num_args = 3,
                value_names = ["X", "Y", "Z"],
                allow_negative_numbers = true,
                required = true
            )]
            at: Vec<f32>,

            /// Approximate upward direction
            #[arg(
                long,
                num_args = 3,
                value_names = ["X", "Y", "Z"],
                allow_negative_numbers = true,
                default_values_t = [0.0, 1.0, 0.0]
            )]
            up: Vec<f32>,
        },
        /// Print the perspective projection matrix for a frustum
        Frustum {
            /// Vertical field of view in degrees
            #[arg(long, default_value_t = 60.0)]
            fov: f32,

            /// Ratio of width to height of the view plane
            #[arg(long, default_value_t = 1.0)]
            aspect_ratio: f32,

            /// Distance from the camera to the near plane
            #[arg(long, default_value_t = 0.1)]
            near: f32,

            /// Distance from the camera to the far plane
            #[arg(long, default_value_t = 100.0)]
            far: f32,
        },
        /// Print the inverse of a matrix
        Invert {
            /// Order of the given elements
            #[arg(short, long, value_enum, default_value_t = Layout::ColumnMajor)]
            layout: Layout,

            /// The 16 matrix elements
            #[arg(num_args = 16, required = true, allow_negative_numbers = true)]
            elements: Vec<f32>,
        },
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum Layout {
        ColumnMajor,
        RowMajor,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        debug!("Parsed command: {:?}", cli.command);

        match cli.command {
            Command::Demo => {
                demo();
                Ok(())
            }
            Command::LookAt { eye, at, up } => {
                let eye = point_from_args(&eye).context("Invalid eye position")?;
                let at = point_from_args(&at).context("Invalid target position")?;
                let up = point_from_args(&up)
                    .context("Invalid up direction")?
                    .with_w(0.0);

                let view = camera::look_at(&eye, &at, &up);
                report_matrix(&view);
                Ok(())
            }
            Command::Frustum {
                fov,
                aspect_ratio,
                near,
                far,
            } => {
                if near <= 0.0 || far <= near {
                    anyhow::bail!("Require 0 < near < far, got near = {near} and far = {far}");
                }
                let projection = camera::symmetric_perspective(
                    Radians::from(Degrees(fov)),
                    aspect_ratio,
                    -near,
                    -far,
                );
                report_matrix(&projection);
                Ok(())
            }
            Command::Invert { layout, elements } => {
                let matrix = match layout {
                    Layout::ColumnMajor => ColumnMajor::unflatten_slice(&elements),
                    Layout::RowMajor => RowMajor::unflatten_slice(&elements),
                }
                .context("Invalid matrix elements")?;
                debug!("Inverting matrix with determinant {}", matrix.determinant());

                let inverse = matrix
                    .try_inverted()
                    .context("Failed to invert matrix")?;
                report_matrix(&inverse);
                Ok(())
            }
        }
    }

    fn point_from_args(values: &[f32]) -> Result<Vector4> {
        let [x, y, z] = <[f32; 3]>::try_from(values)?;
        Ok(Vector4::point(x, y, z))
    }

    fn report_matrix(matrix: &Matrix4) {
        if !matrix.is_finite() {
            warn!("Result contains non-finite elements");
        }
        print!("{matrix}");
    }

    fn demo() {
        let v1 = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let v2 = Vector4::new(5.0, 6.0, 7.0, 8.0);
        let s = 3.0_f32;

        println!("v1 = {v1}");
        println!("v2 = {v2}");
        println!("s * v1 = {}", s * v1);
        println!("v1 + v2 = {}", v1 + v2);
        println!("v1 - v2 = {}", v1 - v2);
        println!("|v1| = {:.4}", v1.norm());
        println!("v1 / |v1| = {}", v1.normalized());
        println!("v1 . v2 = {:.4}", v1.dot(&v2));
        println!("v1 x v2 = {}", v1.cross(&v2));
        println!();

        let m1 = Matrix4::from_columns(
            Vector4::new(1.0, -5.0, 9.0, 13.0),
            Vector4::new(2.0, 6.0, -10.0, 14.0),
            Vector4::new(3.0, 7.0, 11.0, 15.0),
            Vector4::new(4.0, 8.0, 12.0, -16.0),
        );
        let m2 = Matrix4::from_columns(
            Vector4::new(4.0, 8.0, 12.0, 16.0),
            Vector4::new(3.0, 7.0, 11.0, 15.0),
            Vector4::new(2.0, 6.0, 10.0, 14.0),
            Vector4::new(1.0, 5.0, 9.0, 13.0),
        );

        println!("m1 =\n{m1}");
        println!("m2 =\n{m2}");
        println!("s * m1 =\n{}", s * m1);
        println!("m1 + m2 =\n{}", m1 + m2);
        println!("m1 - m2 =\n{}", m1 - m2);
        println!("m1 * m2 =\n{}", m1 * m2);
        println!("m1^T =\n{}", m1.transposed());
        println!("minors of m1 =\n{}", m1.minor_matrix());
        println!("det(m1) = {:.4}", m1.determinant());
        println!("m1^-1 =\n{}", m1.inverted());
        println!("m1 * v1 = {}", m1 * v1);

        match m2.try_inverted() {
            Ok(inverse) => println!("m2^-1 =\n{inverse}"),
            Err(error) => warn!("m2 has no inverse: {error}"),
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
