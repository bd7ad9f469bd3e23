use approx::{assert_abs_diff_eq, assert_relative_eq};
use fastrand::Rng;
use vecmath::*;

const ITERATIONS: usize = 500;

fn random_vec3(rng: &mut Rng) -> Vec3<f64> {
    Vector::from_fn(|_| rng.f64() * 200.0 - 100.0)
}

#[test]
fn construction_and_indexing() {
    let mut rng = Rng::with_seed(0x5eed_0001);
    for _ in 0..ITERATIONS {
        let elems = [rng.i32(..), rng.i32(..), rng.i32(..), rng.i32(..)];
        let v = Vector::new(elems);
        for (i, elem) in elems.iter().enumerate() {
            assert_eq!(v[i], *elem);
        }
        assert_eq!(Vector::<i32, 4>::splat(elems[0]), [elems[0]; 4]);
    }
}

#[test]
fn add_sub_inverse() {
    let mut rng = Rng::with_seed(0x5eed_0002);
    for _ in 0..ITERATIONS {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        assert_abs_diff_eq!(a + b - b, a, epsilon = 1e-9);
        assert_eq!(a + b, b + a);
    }
}

#[test]
fn equality_and_ordering_are_lexicographic() {
    let mut rng = Rng::with_seed(0x5eed_0003);
    for _ in 0..ITERATIONS {
        // Small ranges so that equal prefixes come up often.
        let a = Vector::<i32, 3>::from_fn(|_| rng.i32(-2..2));
        let b = Vector::<i32, 3>::from_fn(|_| rng.i32(-2..2));

        assert_eq!(a == b, a.as_array() == b.as_array());
        assert_eq!(a.partial_cmp(&b), a.as_array().partial_cmp(b.as_array()));
        assert_eq!(a < b, b > a);
        assert_eq!(a <= b, !(a > b));
        assert!(!(a < a) && !(a > a));
    }
}

#[test]
fn dot_is_commutative() {
    let mut rng = Rng::with_seed(0x5eed_0004);
    for _ in 0..ITERATIONS {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.length_squared(), a.dot(a));
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = Rng::with_seed(0x5eed_0005);
    for _ in 0..ITERATIONS {
        let a = random_vec3(&mut rng);
        if a.length() < 1e-3 {
            continue;
        }
        assert_relative_eq!(a.normalize().length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn cross_is_orthogonal() {
    let mut rng = Rng::with_seed(0x5eed_0006);
    for _ in 0..ITERATIONS {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        let c = a.cross(b);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(b.cross(a), -c, epsilon = 1e-9);
    }
}

#[test]
fn text_roundtrip() {
    let mut rng = Rng::with_seed(0x5eed_0007);
    for _ in 0..ITERATIONS {
        let a = random_vec3(&mut rng);
        assert_eq!(a.to_string().parse::<Vec3<f64>>().unwrap(), a);

        let mut read = Vec3::<f64>::ZERO;
        read.read_from(&mut format!("{a:#}").as_bytes()).unwrap();
        assert_eq!(read, a);
    }
}
