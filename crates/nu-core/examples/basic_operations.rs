//! Basic N/U Algebra Operations
//!
//! This example walks through the core operators with measurement-style
//! inputs and contrasts the propagated bounds with the Gaussian
//! root-sum-square figures.

use nu_core::{cumulative_sum, Nu};

fn main() {
    println!("=== N/U Algebra Walkthrough ===\n");

    // 1. Addition of two voltage readings
    println!("1. Voltage Addition");
    let v1 = Nu::new(2.00, 0.05);
    let v2 = Nu::new(1.20, 0.02);
    let total = v1 + v2;

    println!("   V1 = {} V", v1);
    println!("   V2 = {} V", v2);
    println!("   V1 + V2 = {} V", total);
    println!(
        "   Interval: [{:.2}, {:.2}] V",
        total.lower_bound(),
        total.upper_bound()
    );

    let rss = (0.05_f64.powi(2) + 0.02_f64.powi(2)).sqrt();
    println!("   Gaussian RSS would report {:.4} V", rss);
    println!(
        "   The N/U bound is {:.2}x wider: bounds add, they never cancel\n",
        total.u / rss
    );

    // 2. Area from two lengths
    println!("2. Area Calculation");
    let length = Nu::new(4.0, 0.1);
    let width = Nu::new(3.0, 0.2);
    let area = length * width;

    println!("   length = {} m, width = {} m", length, width);
    println!("   area = {} m^2", area);
    println!(
        "   relative uncertainty: {:.1}%",
        area.relative_uncertainty() * 100.0
    );
    println!("   sign stable: {}\n", area.is_sign_stable());

    // 3. Large product
    println!("3. Large Product");
    let x = Nu::new(100.0, 10.0);
    let y = Nu::new(200.0, 5.0);
    let product = x * y;
    println!("   {} * {} = {}", x, y, product);
    println!("   bound term: |100|*5 + |200|*10 = {}\n", 100.0 * 5.0 + 200.0 * 10.0);

    // 4. Combining repeated measurements
    println!("4. Multiple Measurements");
    let measurements = [
        Nu::new(100.0, 2.0),
        Nu::new(105.0, 1.5),
        Nu::new(102.5, 1.0),
    ];
    for (i, m) in measurements.iter().enumerate() {
        println!("   reading {}: {}", i + 1, m);
    }
    let sum = cumulative_sum(&measurements);
    println!("   cumulative sum: {}\n", sum);

    // 5. Scalar and affine maps
    println!("5. Scalar and Affine Maps");
    let celsius = Nu::new(20.0, 0.5);
    let fahrenheit = celsius.affine(9.0 / 5.0, 32.0);
    println!("   {} C  ->  {} F", celsius, fahrenheit);
    let doubled = 2.0 * celsius;
    println!("   doubled: {}\n", doubled);

    // 6. Catch and Flip conserve |n| + u
    println!("6. Catch and Flip");
    let a = Nu::new(5.0, 2.0);
    println!("   a = {}, M = {}", a, a.invariant());
    println!("   catch(a) = {}, M = {}", a.catch(), a.catch().invariant());
    println!("   flip(a)  = {}, M = {}", a.flip(), a.flip().invariant());

    // 7. Infix surface
    println!("\n7. Operator Surface");
    let b = Nu::new(10.0, 1.0);
    println!("   b + 5.0 = {}", b + 5.0);
    println!("   2.5 * b = {}", 2.5 * b);
    println!("   -b      = {}", -b);
}
