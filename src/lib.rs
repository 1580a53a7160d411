pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod complex {
        pub mod tocomplex;
    }

    pub mod integration {
        pub mod integrationerror;
        pub mod quadraturerule;
        pub mod quadrature;
        pub mod lineintegral;
        pub mod contourintegral;
        pub mod integrationpath;
        pub mod examplefunctions;
        pub mod quadraturesettingsmanager;
        pub mod integrationpathmanager;
    }
}
