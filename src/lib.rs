pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
    }

    pub mod polynomial {
        pub mod polynomialerror;
        pub mod domain;
        pub mod polysum;
        pub mod basis;
        pub mod basisfunction;
        pub mod conversion;
        pub mod polynomialsum;
        pub mod polynomial;
        pub mod chebyshevsum;
        pub mod legendresum;
        pub mod hermitesum;
        pub mod bernstein;
        pub mod exponential;
        pub mod polynomialmanager;
    }
}
